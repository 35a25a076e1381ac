//! Sample normalization: channel collapse and float-to-integer conversion.
//!
//! Everything lossy about getting arbitrary WAV input into the 16-bit mono
//! form the codec embeds lives here, so the overflow and truncation behavior
//! can be tested separately from the bit layout.

/// Converts a float sample in [-1.0, 1.0] to a 16-bit integer.
///
/// Multiplies by 32767 and truncates toward zero, no rounding. Input outside
/// [-1.0, 1.0] wraps two's-complement instead of saturating. Both behaviors
/// are inherited from the original format and kept as-is.
pub fn float_to_i16(value: f64) -> i16 {
    (value * 32767.0) as i64 as i16
}

/// Collapses interleaved 16-bit frames to mono by per-frame averaging.
///
/// The average truncates toward zero. A trailing short frame (interleaved
/// length not a multiple of `channels`) is averaged over the samples present.
pub fn collapse_to_mono(frames: &[i16], channels: usize) -> Vec<i16> {
    if channels <= 1 {
        return frames.to_vec();
    }

    frames
        .chunks(channels)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| i32::from(s)).sum();
            (sum / frame.len() as i32) as i16
        })
        .collect()
}

/// Collapses interleaved float frames to mono and normalizes to 16-bit.
pub fn normalize_frames(frames: &[f32], channels: usize) -> Vec<i16> {
    let channels = channels.max(1);

    frames
        .chunks(channels)
        .map(|frame| {
            let sum: f64 = frame.iter().map(|&s| f64::from(s)).sum();
            float_to_i16(sum / frame.len() as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_truncates_toward_zero() {
        assert_eq!(float_to_i16(0.0), 0);
        assert_eq!(float_to_i16(1.0), 32767);
        assert_eq!(float_to_i16(-1.0), -32767);
        // 0.5 * 32767 = 16383.5, truncated
        assert_eq!(float_to_i16(0.5), 16383);
        assert_eq!(float_to_i16(-0.5), -16383);
    }

    #[test]
    fn test_float_out_of_range_wraps() {
        // 1.5 * 32767 = 49150.5 -> 49150, wraps to 49150 - 65536
        assert_eq!(float_to_i16(1.5), 49150u16 as i16);
        assert_eq!(float_to_i16(1.5), -16386);
        assert_eq!(float_to_i16(-1.5), 16386);
    }

    #[test]
    fn test_mono_passthrough() {
        let frames = vec![1i16, -2, 3];
        assert_eq!(collapse_to_mono(&frames, 1), frames);
    }

    #[test]
    fn test_stereo_collapse_truncates() {
        // (100 + 101) / 2 = 100.5 -> 100; (-3 + -4) / 2 = -3.5 -> -3
        let frames = vec![100i16, 101, -3, -4];
        assert_eq!(collapse_to_mono(&frames, 2), vec![100, -3]);
    }

    #[test]
    fn test_stereo_collapse_short_final_frame() {
        let frames = vec![10i16, 20, 30];
        assert_eq!(collapse_to_mono(&frames, 2), vec![15, 30]);
    }

    #[test]
    fn test_float_frames_stereo() {
        let frames = vec![0.5f32, 0.5, -1.0, 1.0];
        assert_eq!(normalize_frames(&frames, 2), vec![16383, 0]);
    }
}
