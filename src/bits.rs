//! MSB-first bit packing and unpacking.
//!
//! One shared convention for both directions of the codec: bits are always
//! ordered most significant first within each byte, and the length header is
//! a big-endian u32. Keeping this in one place is what guarantees encode and
//! decode agree bit-for-bit.

/// Expands bytes into bits, most significant bit first within each byte.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Packs bits into bytes, most significant bit first within each byte.
///
/// A final group of fewer than 8 bits is completed with zero bits in the
/// least significant positions. When the input came from a sub-byte payload
/// this padding is indistinguishable from real trailing zero bits, which is
/// the documented lossy edge of the format.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|group| {
            let mut byte = group.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            byte <<= 8 - group.len();
            byte
        })
        .collect()
}

/// Packs up to 32 bits into an integer, most significant bit first.
pub fn bits_to_u32(bits: &[u8]) -> u32 {
    bits.iter()
        .fold(0u32, |value, &bit| (value << 1) | u32::from(bit))
}
