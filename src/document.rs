// Document acquisition and analysis reports for the CLI.
//
// The fingerprint core only ever sees extracted plain text. Everything that
// can fail — missing files, non-UTF-8 bytes, stdin errors — stays out here.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::simhash::compare::{common_bits, hamming_distance};
use crate::simhash::engine::{fingerprint, Fingerprint};
use crate::simhash::tokens::{tokenize_and_count, total_occurrences, TokenCounts};

/// A plain-text document together with where it came from.
pub struct Document {
    /// Display name for reports: the file path, or "<stdin>".
    pub source: String,
    pub text: String,
}

impl Document {
    /// Read a document from a file path, or from stdin when the path is "-".
    pub fn read(path: &str) -> Result<Self> {
        if path == "-" {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read document from stdin")?;
            return Ok(Self {
                source: "<stdin>".to_string(),
                text,
            });
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document from {path}"))?;
        Ok(Self {
            source: path.to_string(),
            text,
        })
    }

    /// Tokenize this document's text.
    pub fn token_counts(&self) -> TokenCounts {
        tokenize_and_count(&self.text)
    }
}

/// Everything the CLI reports about one fingerprinted document.
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub source: String,
    /// The fingerprint as its raw 64-bit value.
    pub fingerprint: Fingerprint,
    /// The same fingerprint as a 64-character binary string, MSB first.
    pub fingerprint_binary: String,
    /// Total token occurrences in the document.
    pub total_tokens: u64,
    /// Number of distinct tokens.
    pub distinct_tokens: usize,
}

/// Result of comparing two documents' fingerprints.
#[derive(Debug, Serialize)]
pub struct ComparisonReport {
    pub a: DocumentReport,
    pub b: DocumentReport,
    /// Matching bits out of 64.
    pub common_bits: u32,
    /// Differing bits out of 64.
    pub hamming_distance: u32,
    /// Threshold the verdict was computed against.
    pub near_duplicate_bits: u32,
    /// True when `common_bits >= near_duplicate_bits`.
    pub near_duplicate: bool,
}

/// Fingerprint a document and gather its report.
pub fn analyze(doc: &Document) -> DocumentReport {
    let counts = doc.token_counts();
    let fp = fingerprint(&counts);

    let report = DocumentReport {
        source: doc.source.clone(),
        fingerprint: fp,
        fingerprint_binary: fp.to_binary(),
        total_tokens: total_occurrences(&counts),
        distinct_tokens: counts.len(),
    };

    info!(
        source = %report.source,
        tokens = report.total_tokens,
        distinct = report.distinct_tokens,
        "Fingerprinted document"
    );

    report
}

/// Fingerprint both documents and compare them bit-for-bit.
pub fn compare_documents(
    a: &Document,
    b: &Document,
    near_duplicate_bits: u32,
) -> ComparisonReport {
    let report_a = analyze(a);
    let report_b = analyze(b);

    let shared = common_bits(report_a.fingerprint, report_b.fingerprint);
    let distance = hamming_distance(report_a.fingerprint, report_b.fingerprint);

    ComparisonReport {
        a: report_a,
        b: report_b,
        common_bits: shared,
        hamming_distance: distance,
        near_duplicate_bits,
        near_duplicate: shared >= near_duplicate_bits,
    }
}
