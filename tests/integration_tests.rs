//! Integration tests for Audiohide
//!
//! These exercise the whole pipeline the CLI uses: WAV file in, normalize,
//! embed, write, read back, extract, WAV file out. The codec only survives
//! bit-exact copies, so every roundtrip here goes through a real file.

use hound::{SampleFormat, WavSpec, WavWriter};
use tempfile::tempdir;

use audiohide::{capacity, decode, encode, read_mono_i16, write_mono_i16};
use audiohide::{DecodeError, EncodeError};

/// Writes a 16-bit PCM WAV with the given interleaved samples.
fn write_wav(path: &std::path::Path, samples: &[i16], sample_rate: u32, channels: u16) {
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for &sample in samples {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();
}

/// A deterministic pseudo-noise carrier long enough for the given secret.
fn noise_carrier(len: usize) -> Vec<i16> {
    (0..len).map(|i| (i * 2731 % 50000) as i32 as u16 as i16).collect()
}

#[test]
fn test_file_roundtrip() {
    let dir = tempdir().unwrap();
    let carrier_path = dir.path().join("carrier.wav");
    let secret_path = dir.path().join("secret.wav");
    let encoded_path = dir.path().join("encoded.wav");
    let decoded_path = dir.path().join("decoded.wav");

    let secret: Vec<i16> = vec![5, -17, 32767, -32768, 0, 9999];
    write_wav(&carrier_path, &noise_carrier(4000), 8000, 1);
    write_wav(&secret_path, &secret, 8000, 1);

    // Encode side: files -> samples -> embed -> file
    let (carrier, carrier_rate) = read_mono_i16(&carrier_path).unwrap();
    let (secret_in, secret_rate) = read_mono_i16(&secret_path).unwrap();
    let encoded = encode(&carrier, carrier_rate, &secret_in, secret_rate).unwrap();
    write_mono_i16(&encoded, carrier_rate, &encoded_path).unwrap();

    // Decode side: file -> samples -> extract -> file
    let (encoded_in, encoded_rate) = read_mono_i16(&encoded_path).unwrap();
    let (recovered, out_rate) = decode(&encoded_in, encoded_rate).unwrap();
    write_mono_i16(&recovered, out_rate, &decoded_path).unwrap();

    let (decoded, decoded_rate) = read_mono_i16(&decoded_path).unwrap();
    assert_eq!(decoded, secret);
    assert_eq!(decoded_rate, 8000);
}

#[test]
fn test_stereo_carrier_collapses_before_embedding() {
    let dir = tempdir().unwrap();
    let carrier_path = dir.path().join("stereo_carrier.wav");

    // 2000 interleaved stereo samples = 1000 mono frames after collapse
    write_wav(&carrier_path, &noise_carrier(2000), 44100, 2);

    let (carrier, rate) = read_mono_i16(&carrier_path).unwrap();
    assert_eq!(carrier.len(), 1000);

    let secret = vec![123i16, -456];
    let encoded = encode(&carrier, rate, &secret, 44100).unwrap();
    let (recovered, _) = decode(&encoded, rate).unwrap();
    assert_eq!(recovered, secret);
}

#[test]
fn test_rate_mismatch_is_fatal() {
    let carrier = noise_carrier(1000);
    let secret = vec![1i16];

    let result = encode(&carrier, 44100, &secret, 8000);
    assert!(matches!(result, Err(EncodeError::RateMismatch { .. })));
}

#[test]
fn test_capacity_reported_matches_encode() {
    let carrier = noise_carrier(500);
    let fits = capacity(carrier.len());

    // Exactly `fits` secret samples succeed, one more fails
    let secret = vec![7i16; fits];
    assert!(encode(&carrier, 8000, &secret, 8000).is_ok());

    let secret = vec![7i16; fits + 1];
    assert!(matches!(
        encode(&carrier, 8000, &secret, 8000),
        Err(EncodeError::CapacityExceeded { .. })
    ));
}

#[test]
fn test_encoded_file_differs_only_in_lsbs() {
    let dir = tempdir().unwrap();
    let encoded_path = dir.path().join("encoded.wav");

    let carrier = noise_carrier(300);
    let secret = vec![-1i16, 2, -3];
    let encoded = encode(&carrier, 8000, &secret, 8000).unwrap();
    write_mono_i16(&encoded, 8000, &encoded_path).unwrap();

    let (from_file, _) = read_mono_i16(&encoded_path).unwrap();
    let window = 32 + secret.len() * 16;
    for (i, (&orig, &enc)) in carrier.iter().zip(from_file.iter()).enumerate() {
        if i < window {
            assert_eq!(orig & !1, enc & !1);
        } else {
            assert_eq!(orig, enc);
        }
    }
}

#[test]
fn test_decoding_unencoded_audio_fails_or_misreads() {
    // Plain audio was never encoded; its LSB noise decodes as a bogus
    // length. With half the LSBs set the declared length far exceeds the
    // file, so this must surface as an error, not an out-of-bounds read.
    let noise: Vec<i16> = (0..10_000).map(|i| (i % 7 - 3) as i16).collect();

    match decode(&noise, 8000) {
        Err(DecodeError::OutOfRange { available, .. }) => assert_eq!(available, 10_000),
        Ok((samples, _)) => assert!(samples.len() * 16 + 32 <= 10_000),
    }
}
