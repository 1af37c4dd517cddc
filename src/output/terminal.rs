// Colored terminal output for fingerprints and comparisons.
//
// This module handles all terminal-specific formatting: colors, alignment,
// verdict hints. The main.rs subcommands delegate here.

use colored::Colorize;

use crate::document::{ComparisonReport, DocumentReport};
use crate::simhash::tokens::TokenCounts;

/// Display a single document's fingerprint report.
pub fn display_report(report: &DocumentReport) {
    println!("\n{}", "=== Document Fingerprint ===".bold());
    println!();
    println!("  Source:          {}", report.source);
    println!(
        "  Tokens:          {} total, {} distinct",
        report.total_tokens, report.distinct_tokens
    );
    println!("  Fingerprint:     {:#018x}", report.fingerprint.bits());
    println!("  Binary:          {}", report.fingerprint_binary);

    if report.total_tokens == 0 {
        println!();
        println!(
            "{}",
            "No tokens found — empty documents fingerprint to all zeros.".dimmed()
        );
    }
}

/// Display a two-document comparison: aligned binary fingerprints, a marker
/// row flagging differing bit positions, and the common-bit verdict.
pub fn display_comparison(report: &ComparisonReport) {
    println!("\n{}", "=== Fingerprint Comparison ===".bold());
    println!();

    let label_width = report.a.source.len().max(report.b.source.len()).max(8);
    println!(
        "  {:<label_width$}  {}",
        report.a.source, report.a.fingerprint_binary
    );
    println!(
        "  {:<label_width$}  {}",
        report.b.source, report.b.fingerprint_binary
    );

    // Mark every differing bit position under the two rows.
    let markers: String = report
        .a
        .fingerprint_binary
        .chars()
        .zip(report.b.fingerprint_binary.chars())
        .map(|(x, y)| if x == y { ' ' } else { '^' })
        .collect();
    println!("  {:<label_width$}  {}", "", markers.dimmed());

    println!();
    let score = format!("Common bits: {}/64", report.common_bits);
    let colored_score = colorize_score(&score, report.common_bits, report.near_duplicate_bits);

    if report.near_duplicate {
        println!(
            "  {}  {}",
            colored_score,
            format!("near-duplicate (>= {} common bits)", report.near_duplicate_bits).dimmed()
        );
    } else {
        println!(
            "  {}  {}",
            colored_score,
            format!("distinct (threshold {} common bits)", report.near_duplicate_bits).dimmed()
        );
    }
    println!();
}

/// Display the most frequent tokens of a document, ranked.
pub fn display_top_tokens(source: &str, counts: &TokenCounts, top: usize) {
    if counts.is_empty() {
        println!("No tokens found in {source}.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top Tokens ({} distinct in {}) ===", counts.len(), source).bold()
    );
    println!();

    // Highest count first; ties break alphabetically so output is stable.
    let mut ranked: Vec<(&String, &u64)> = counts.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    for (i, (token, count)) in ranked.iter().take(top).enumerate() {
        println!("  {:>4}. {:<32} {:>6}", i + 1, token, count);
    }

    if counts.len() > top {
        println!();
        println!(
            "{}",
            format!("... and {} more (raise --top to see them)", counts.len() - top).dimmed()
        );
    }
    println!();
}

/// Color the score by how close it sits to the near-duplicate threshold.
fn colorize_score(score: &str, common: u32, threshold: u32) -> colored::ColoredString {
    if common >= threshold {
        score.bright_green().bold()
    } else if common + 6 >= threshold {
        score.bright_yellow()
    } else {
        score.normal()
    }
}
