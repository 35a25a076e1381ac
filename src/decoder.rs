//! Payload extraction.
//!
//! The decode path:
//! 1. Pack the LSBs of the first 32 samples into the payload bit count
//! 2. Collect that many LSBs starting at sample 32
//! 3. Regroup the bits into bytes MSB-first, zero-padding a partial tail
//! 4. Reinterpret the bytes as native-layout 16-bit samples
//!
//! The header is trusted as-is: there is no checksum and no magic marker, so
//! running decode over audio that was never encoded yields a bogus length and
//! either an [`DecodeError::OutOfRange`] failure or garbage samples. Nothing
//! beyond sample `32 + payload_bits - 1` is ever read.

use thiserror::Error;

use crate::bits::{bits_to_bytes, bits_to_u32};
use crate::{BYTES_PER_SAMPLE, HEADER_BITS};

/// Errors that can occur during decoding.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Header declares more data than the audio holds: need {needed} samples, have {available}")]
    OutOfRange { needed: usize, available: usize },
}

/// Recovers the secret samples embedded in `encoded`.
///
/// The returned rate is the encoded stream's rate. The encoder only accepts
/// a secret whose rate equals the carrier's, so this reconstructs the
/// secret's rate too; the header itself carries no rate field, a known
/// limitation if the format ever allows differing rates.
///
/// # Errors
/// [`DecodeError::OutOfRange`] when the input is shorter than the 32-sample
/// header or the header-declared payload runs past the end of the input.
pub fn decode(encoded: &[i16], encoded_rate: u32) -> Result<(Vec<i16>, u32), DecodeError> {
    if encoded.len() < HEADER_BITS {
        return Err(DecodeError::OutOfRange {
            needed: HEADER_BITS,
            available: encoded.len(),
        });
    }

    let header: Vec<u8> = lsbs(&encoded[..HEADER_BITS]);
    let payload_bits = bits_to_u32(&header) as usize;

    let needed = HEADER_BITS + payload_bits;
    if needed > encoded.len() {
        return Err(DecodeError::OutOfRange {
            needed,
            available: encoded.len(),
        });
    }

    let bytes = bits_to_bytes(&lsbs(&encoded[HEADER_BITS..needed]));

    // A trailing odd byte can only come from a non-conformant header; treat
    // it as the low byte of a final sample rather than dropping it
    let secret = bytes
        .chunks(BYTES_PER_SAMPLE)
        .map(|pair| match *pair {
            [lo, hi] => i16::from_ne_bytes([lo, hi]),
            [lo] => i16::from_ne_bytes([lo, 0]),
            _ => unreachable!("chunks of {BYTES_PER_SAMPLE}"),
        })
        .collect();

    Ok((secret, encoded_rate))
}

fn lsbs(samples: &[i16]) -> Vec<u8> {
    samples.iter().map(|&s| (s & 1) as u8).collect()
}
