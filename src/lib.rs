//! # Audiohide - Hide audio in audio
//!
//! Audiohide embeds a secret PCM audio signal in the least significant bits
//! of a larger carrier PCM signal, and recovers it exactly.
//!
//! ## Format
//!
//! The embedded bitstream is length-prefixed:
//! - samples `[0, 32)`: a 32-bit big-endian header holding the payload
//!   length **in bits**, one bit per sample LSB, most significant bit first
//! - samples `[32, 32 + payload_bits)`: the secret samples as raw bytes
//!   (native layout, 2 bytes per sample), unpacked MSB-first
//!
//! Every other sample, and every bit above the LSB of a touched sample, is
//! carried through bit-identical, so the embedding is low-amplitude but only
//! survives bit-exact copies of the carrier. Any transcoding, resampling, or
//! re-quantization between encode and decode destroys the payload.
//!
//! ## Security Model
//!
//! There is none. The header carries no checksum and no magic marker, so the
//! LSB noise of the first 32 samples of any unrelated audio decodes as a
//! bogus length and will usually fail with [`DecodeError::OutOfRange`] or
//! produce garbage. This matches the original format and is kept as-is.
//!
//! ## Example Usage
//!
//! ```rust
//! use audiohide::{encode, decode};
//!
//! // 8000 Hz carrier with room for a 32-bit header plus 16 payload bits
//! let carrier = vec![100i16; 48];
//! let secret = vec![5i16];
//!
//! let encoded = encode(&carrier, 8000, &secret, 8000).unwrap();
//! assert_eq!(encoded.len(), carrier.len());
//!
//! let (recovered, rate) = decode(&encoded, 8000).unwrap();
//! assert_eq!(recovered, secret);
//! assert_eq!(rate, 8000);
//! ```
//!
//! ## Modules
//!
//! - [`sample`]: channel collapse and float-to-i16 normalization
//! - [`bits`]: MSB-first bit packing shared by both directions
//! - [`encoder`]: payload embedding and capacity checks
//! - [`decoder`]: header parsing and payload extraction
//! - [`wav`]: WAV container read/write (the only file-format dependency)

/// Number of samples holding the big-endian payload-length header.
pub const HEADER_BITS: usize = 32;

/// Bytes occupied by one sample in the embedded payload.
pub const BYTES_PER_SAMPLE: usize = 2;

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod sample;
pub mod wav;

// Re-export commonly used items at the crate root
pub use decoder::{decode, DecodeError};
pub use encoder::{capacity, encode, EncodeError};
pub use sample::{collapse_to_mono, float_to_i16, normalize_frames};
pub use wav::{read_mono_i16, write_mono_i16, WavError};
