// Tokenizer / frequency counter.
//
// Lowercases input (ASCII-only folding) and scans for maximal runs of
// [a-z0-9]. Everything else — whitespace, punctuation, non-ASCII letters —
// acts as a separator and never reaches a token.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex_lite::Regex;

/// Occurrence count per distinct token within one document.
pub type TokenCounts = HashMap<String, u64>;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[a-z0-9]+").expect("valid token pattern"))
}

/// Extract every token occurrence from raw text, in scan order.
///
/// Case folding is ASCII-only: non-ASCII uppercase letters stay unfolded and
/// therefore act as separators like any other non-`[a-z0-9]` character.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_ascii_lowercase();

    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count token occurrences in a raw text document.
///
/// Total over all inputs: empty text, punctuation-only text, and text with
/// no ASCII alphanumerics all yield an empty mapping, never an error.
pub fn tokenize_and_count(text: &str) -> TokenCounts {
    let mut counts = TokenCounts::new();
    for token in tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Total token occurrences across a mapping (the document's token length).
pub fn total_occurrences(counts: &TokenCounts) -> u64 {
    counts.values().sum()
}
