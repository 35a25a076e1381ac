//! WAV container read/write.
//!
//! The codec itself only sees `(samples, rate)` pairs; this module is the
//! file-format boundary. Reading accepts 16-bit integer PCM and 32-bit float
//! WAV, collapses multi-channel input to mono, and normalizes to 16-bit
//! signed samples. Writing always emits mono 16-bit PCM.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use thiserror::Error;

use crate::sample::{collapse_to_mono, normalize_frames};

/// Errors from the WAV boundary.
#[derive(Error, Debug)]
pub enum WavError {
    #[error("Audio load error: {0}")]
    Load(String),

    #[error("Audio save error: {0}")]
    Save(String),

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),
}

/// Reads a WAV file as mono 16-bit samples plus its sample rate.
pub fn read_mono_i16<P: AsRef<Path>>(path: P) -> Result<(Vec<i16>, u32), WavError> {
    let reader = WavReader::open(path).map_err(|e| WavError::Load(e.to_string()))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let samples = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => {
            let frames: Vec<i16> = reader
                .into_samples::<i16>()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| WavError::Load(e.to_string()))?;
            collapse_to_mono(&frames, channels)
        }
        (SampleFormat::Float, 32) => {
            let frames: Vec<f32> = reader
                .into_samples::<f32>()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| WavError::Load(e.to_string()))?;
            normalize_frames(&frames, channels)
        }
        _ => {
            return Err(WavError::UnsupportedFormat(format!(
                "Only 16-bit PCM or 32-bit float WAV is supported, got {} bits {:?}",
                spec.bits_per_sample, spec.sample_format
            )))
        }
    };

    Ok((samples, spec.sample_rate))
}

/// Writes mono 16-bit samples as a PCM WAV file.
pub fn write_mono_i16<P: AsRef<Path>>(
    samples: &[i16],
    sample_rate: u32,
    path: P,
) -> Result<(), WavError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| WavError::Save(e.to_string()))?;
    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| WavError::Save(e.to_string()))?;
    }

    writer.finalize().map_err(|e| WavError::Save(e.to_string()))
}
