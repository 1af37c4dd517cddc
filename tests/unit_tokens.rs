// Unit tests for the tokenizer / frequency counter.
//
// Exercises the token character class, ASCII-only case folding, separator
// handling, and the total-function edge cases (empty input, no qualifying
// characters).

use imprint::simhash::tokens::{tokenize, tokenize_and_count, total_occurrences};

// ============================================================
// Token extraction — scan order and character class
// ============================================================

#[test]
fn tokens_appear_in_scan_order() {
    assert_eq!(tokenize("Hello, World! 123"), vec!["hello", "world", "123"]);
}

#[test]
fn maximal_runs_are_not_split() {
    assert_eq!(tokenize("abc123def"), vec!["abc123def"]);
}

#[test]
fn consecutive_separators_collapse() {
    assert_eq!(tokenize("a -- b ?? c"), vec!["a", "b", "c"]);
}

#[test]
fn uppercase_ascii_folds_into_tokens() {
    assert_eq!(tokenize("RUST RuSt rust"), vec!["rust", "rust", "rust"]);
}

#[test]
fn non_ascii_characters_are_separators() {
    // Unicode letters never join a token, even when a Unicode lowercasing
    // would produce ASCII
    assert_eq!(tokenize("naïve café"), vec!["na", "ve", "caf"]);
    assert_eq!(tokenize("ÜBER"), vec!["ber"]);
}

#[test]
fn pure_digit_tokens_are_valid() {
    assert_eq!(tokenize("4 8 15 16 23 42"), vec!["4", "8", "15", "16", "23", "42"]);
}

// ============================================================
// Frequency counting — totals and edge cases
// ============================================================

#[test]
fn counts_accumulate_per_distinct_token() {
    let counts = tokenize_and_count("to be or not to be");
    assert_eq!(counts["to"], 2);
    assert_eq!(counts["be"], 2);
    assert_eq!(counts["or"], 1);
    assert_eq!(counts["not"], 1);
    assert_eq!(counts.len(), 4);
    assert_eq!(total_occurrences(&counts), 6);
}

#[test]
fn empty_input_yields_empty_mapping() {
    assert!(tokenize_and_count("").is_empty());
}

#[test]
fn input_with_no_qualifying_characters_yields_empty_mapping() {
    assert!(tokenize_and_count("¡™£¢∞§¶ • ... !!!").is_empty());
    assert!(tokenize_and_count("\n\t  \r\n").is_empty());
}

#[test]
fn case_variants_count_as_one_token() {
    let counts = tokenize_and_count("Word word WORD");
    assert_eq!(counts["word"], 3);
    assert_eq!(counts.len(), 1);
}
