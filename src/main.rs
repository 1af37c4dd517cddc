use anyhow::Result;
use clap::{Parser, Subcommand};

use imprint::config::Config;
use imprint::document::{analyze, compare_documents, Document};
use imprint::output::terminal;

/// Imprint: near-duplicate text detection for plain-text documents.
///
/// Fingerprints a document's word-frequency distribution into 64 bits and
/// compares fingerprints by common-bit count. Supply extracted plain text —
/// fetching and markup stripping happen upstream of this tool.
#[derive(Parser)]
#[command(name = "imprint", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fingerprint a single document
    Hash {
        /// Path to a plain-text file, or "-" for stdin
        file: String,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Compare two documents and report their common fingerprint bits
    Compare {
        /// First document ("-" for stdin)
        file_a: String,

        /// Second document
        file_b: String,

        /// Emit the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show the most frequent tokens of a document
    Tokens {
        /// Path to a plain-text file, or "-" for stdin
        file: String,

        /// How many tokens to show (default: IMPRINT_TOP_TOKENS or 20)
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("imprint=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash { file, json } => {
            let doc = Document::read(&file)?;
            let report = analyze(&doc);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Compare { file_a, file_b, json } => {
            let config = Config::load()?;
            let doc_a = Document::read(&file_a)?;
            let doc_b = Document::read(&file_b)?;
            let report = compare_documents(&doc_a, &doc_b, config.near_duplicate_bits);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_comparison(&report);
            }
        }

        Commands::Tokens { file, top } => {
            let config = Config::load()?;
            let doc = Document::read(&file)?;
            let counts = doc.token_counts();
            terminal::display_top_tokens(&doc.source, &counts, top.unwrap_or(config.top_tokens));
        }
    }

    Ok(())
}
