//! Payload embedding.
//!
//! The encode path:
//! 1. Reject mismatched sample rates (no resampling is ever done)
//! 2. Reinterpret the secret samples as raw bytes, expand to bits MSB-first
//! 3. Check the carrier has room for 32 header bits plus the payload
//! 4. Copy the carrier and overwrite one LSB per bit, header first
//!
//! Capacity is validated before any bit is written, so a failed encode never
//! produces a partially embedded carrier.

use thiserror::Error;

use crate::bits::bytes_to_bits;
use crate::{BYTES_PER_SAMPLE, HEADER_BITS};

/// Errors that can occur during encoding.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Sample rates must match: carrier is {carrier} Hz, secret is {secret} Hz")]
    RateMismatch { carrier: u32, secret: u32 },

    #[error("Carrier too short for this secret: need {needed} samples, have {available}")]
    CapacityExceeded { needed: usize, available: usize },
}

/// Returns how many secret samples fit in a carrier of `carrier_len` samples.
///
/// One carrier sample holds one bit, minus the 32-sample length header.
pub fn capacity(carrier_len: usize) -> usize {
    carrier_len.saturating_sub(HEADER_BITS) / (BYTES_PER_SAMPLE * 8)
}

/// Embeds `secret` in the LSBs of a copy of `carrier`.
///
/// Both inputs must already be mono 16-bit samples (see [`crate::sample`]
/// for the normalization applied to file input). The carrier is never
/// modified; the returned sequence has the carrier's length and rate.
///
/// # Errors
/// * [`EncodeError::RateMismatch`] if the two rates differ
/// * [`EncodeError::CapacityExceeded`] if `carrier` is shorter than
///   `32 + secret.len() * 16` samples
pub fn encode(
    carrier: &[i16],
    carrier_rate: u32,
    secret: &[i16],
    secret_rate: u32,
) -> Result<Vec<i16>, EncodeError> {
    if carrier_rate != secret_rate {
        return Err(EncodeError::RateMismatch {
            carrier: carrier_rate,
            secret: secret_rate,
        });
    }

    let secret_bytes: Vec<u8> = secret.iter().flat_map(|s| s.to_ne_bytes()).collect();
    let payload = bytes_to_bits(&secret_bytes);

    let needed = HEADER_BITS + payload.len();
    if needed > carrier.len() {
        return Err(EncodeError::CapacityExceeded {
            needed,
            available: carrier.len(),
        });
    }

    // Header counts payload BITS, big-endian, one bit per sample MSB-first
    let header = bytes_to_bits(&(payload.len() as u32).to_be_bytes());

    let mut encoded = carrier.to_vec();
    for (sample, &bit) in encoded.iter_mut().zip(header.iter().chain(payload.iter())) {
        *sample = (*sample & !1) | i16::from(bit);
    }

    Ok(encoded)
}
