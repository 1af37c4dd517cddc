// Simhash fingerprinting — tokenization, per-token hashing, fingerprint
// assembly, and fingerprint comparison.

pub mod compare;
pub mod engine;
pub mod hash;
pub mod tokens;

use engine::Fingerprint;

/// Fingerprint raw text in one step: tokenize, count, assemble.
pub fn fingerprint_text(text: &str) -> Fingerprint {
    engine::fingerprint(&tokens::tokenize_and_count(text))
}
