//! Digest rendering for stdout.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use fips256_core::Digest;

/// How the digest is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Digest: <64 hex characters>`
    #[default]
    Hex,
    /// One-line JSON object with algorithm, message length and digest.
    Json,
}

#[derive(Debug, Serialize)]
struct DigestReport<'a> {
    algorithm: &'static str,
    length: usize,
    digest: &'a Digest,
}

/// Render `digest` of a `length`-byte message in `format`.
pub fn render(digest: &Digest, length: usize, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Hex => Ok(format!("Digest: {digest}")),
        OutputFormat::Json => {
            let report = DigestReport {
                algorithm: "sha256",
                length,
                digest,
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}
