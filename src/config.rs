// Runtime configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};

/// Default minimum common bits for the near-duplicate verdict.
pub const DEFAULT_NEAR_DUPLICATE_BITS: u32 = 58;

/// Default number of tokens listed by `imprint tokens`.
pub const DEFAULT_TOP_TOKENS: usize = 20;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// variable has a default; nothing here is required.
pub struct Config {
    /// Minimum common bits (out of 64) for two documents to be reported as
    /// near-duplicates (IMPRINT_NEAR_DUPLICATE_BITS).
    pub near_duplicate_bits: u32,
    /// How many of the most frequent tokens `imprint tokens` prints
    /// (IMPRINT_TOP_TOKENS).
    pub top_tokens: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let near_duplicate_bits = match env::var("IMPRINT_NEAR_DUPLICATE_BITS") {
            Ok(raw) => {
                let bits: u32 = raw.parse().with_context(|| {
                    format!("IMPRINT_NEAR_DUPLICATE_BITS is not a number: {raw}")
                })?;
                if bits > 64 {
                    anyhow::bail!(
                        "IMPRINT_NEAR_DUPLICATE_BITS must be between 0 and 64, got {bits}"
                    );
                }
                bits
            }
            Err(_) => DEFAULT_NEAR_DUPLICATE_BITS,
        };

        let top_tokens = match env::var("IMPRINT_TOP_TOKENS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("IMPRINT_TOP_TOKENS is not a number: {raw}"))?,
            Err(_) => DEFAULT_TOP_TOKENS,
        };

        Ok(Self {
            near_duplicate_bits,
            top_tokens,
        })
    }
}
