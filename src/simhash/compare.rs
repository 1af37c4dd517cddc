// Fingerprint comparison — Hamming distance over the 64-bit space.

use super::engine::{Fingerprint, FINGERPRINT_BITS};

/// Number of differing bits between two fingerprints.
pub fn hamming_distance(a: Fingerprint, b: Fingerprint) -> u32 {
    (a.bits() ^ b.bits()).count_ones()
}

/// Number of matching bits between two fingerprints, in `0..=64`.
///
/// Symmetric in its arguments; a fingerprint shares all 64 bits with itself.
pub fn common_bits(a: Fingerprint, b: Fingerprint) -> u32 {
    FINGERPRINT_BITS as u32 - hamming_distance(a, b)
}
