// Polynomial rolling hash over a token's characters:
//
//   hash(s) = sum( codepoint(s[i]) * 53^i )  mod 2^64
//
// Every addition and multiplication wraps as unsigned 64-bit arithmetic,
// including the running power of the base. Intentionally not cryptographic —
// the fingerprint engine only needs a deterministic spread of tokens across
// the 64-bit space.

/// Base of the hash polynomial.
pub const HASH_BASE: u64 = 53;

/// Hash a token to a 64-bit value.
///
/// Pure function of the token's character sequence. Tokens only ever contain
/// ASCII `[a-z0-9]`, so each code point fits in a single byte.
pub fn token_hash(token: &str) -> u64 {
    let mut hash: u64 = 0;
    let mut power: u64 = 1;

    for ch in token.chars() {
        hash = hash.wrapping_add((ch as u64).wrapping_mul(power));
        power = power.wrapping_mul(HASH_BASE);
    }

    hash
}
