// Fingerprint assembly — weighted bit voting over token hashes.
//
// Each token's 64-bit hash votes on every bit position: +count where the
// hash bit is 1, -count where it is 0. An output bit is 1 only when its
// tally ends strictly positive, so a tied position resolves to 0.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::hash::token_hash;
use super::tokens::TokenCounts;

/// Width of a fingerprint in bits.
pub const FINGERPRINT_BITS: usize = 64;

/// A 64-bit document fingerprint.
///
/// Documents with similar token-frequency distributions produce fingerprints
/// differing in few bits; unrelated documents differ in roughly half.
/// Immutable once produced; serializes as its raw integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Wrap a raw 64-bit value as a fingerprint.
    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw 64-bit value.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Render as a 64-character binary string, most significant bit first.
    pub fn to_binary(self) -> String {
        format!("{:064b}", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:064b}", self.0)
    }
}

/// Compute the simhash fingerprint of a token frequency mapping.
///
/// Pure function of the (token, count) pairs as a set: iteration order of
/// the mapping cannot affect the result, and no state is carried between
/// calls. The empty mapping yields the all-zero fingerprint. Never fails.
pub fn fingerprint(freqs: &TokenCounts) -> Fingerprint {
    // One signed tally per bit position. A slot moves by at most the
    // document's total token occurrences, so i64 covers any real document.
    let mut tallies = [0i64; FINGERPRINT_BITS];

    for (token, &count) in freqs {
        let h = token_hash(token);
        let weight = count as i64;

        for (i, tally) in tallies.iter_mut().enumerate() {
            if (h >> i) & 1 == 1 {
                *tally += weight;
            } else {
                *tally -= weight;
            }
        }
    }

    let mut bits: u64 = 0;
    for (i, &tally) in tallies.iter().enumerate() {
        // Strictly positive only: a zero tally leaves the bit clear.
        if tally > 0 {
            bits |= 1 << i;
        }
    }

    Fingerprint(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_yields_all_zero_fingerprint() {
        assert_eq!(fingerprint(&TokenCounts::new()).bits(), 0);
    }

    #[test]
    fn single_unit_weight_token_reproduces_its_hash() {
        let mut freqs = TokenCounts::new();
        freqs.insert("a".to_string(), 1);
        assert_eq!(fingerprint(&freqs).bits(), token_hash("a"));

        let mut freqs = TokenCounts::new();
        freqs.insert("fingerprint".to_string(), 1);
        assert_eq!(fingerprint(&freqs).bits(), token_hash("fingerprint"));
    }

    #[test]
    fn tied_bits_resolve_to_zero() {
        // hash("a") = 0b1100001, hash("b") = 0b1100010. With equal weights
        // the two low bits tally to exactly zero and must come out clear,
        // leaving only the shared bits 5 and 6.
        let mut freqs = TokenCounts::new();
        freqs.insert("a".to_string(), 1);
        freqs.insert("b".to_string(), 1);
        assert_eq!(fingerprint(&freqs).bits(), 0b110_0000);
    }

    #[test]
    fn heavier_token_wins_contested_bits() {
        let mut freqs = TokenCounts::new();
        freqs.insert("a".to_string(), 2);
        freqs.insert("b".to_string(), 1);
        assert_eq!(fingerprint(&freqs).bits(), token_hash("a"));
    }

    #[test]
    fn binary_rendering_is_64_chars_msb_first() {
        let fp = Fingerprint::from_bits(1);
        let binary = fp.to_binary();
        assert_eq!(binary.len(), 64);
        assert!(binary.starts_with("000"));
        assert!(binary.ends_with('1'));
        assert_eq!(binary, fp.to_string());
    }
}
