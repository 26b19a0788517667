//! # Hash Command
//!
//! Loads the message, runs the core pipeline and prints the digest.
//! Optional collaborators hang off the same flow: the padded-message dump,
//! the sha2 reference check and the expected-digest comparison.

use anyhow::{Context, Result};
use clap::Args;

use fips256_core::{padding, Digest};

use crate::config::Settings;
use crate::dump;
use crate::input::{self, InputArgs};
use crate::output::{self, OutputFormat};
use crate::verify;

/// Arguments for hashing one message.
#[derive(Args, Debug, Clone)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Hash the file bytes exactly as stored (no UTF-8 decoding, no stripping).
    #[arg(long, requires = "file", conflicts_with = "text")]
    pub raw: bool,

    /// Output format [default: hex, or $FIPS256_FORMAT].
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Cross-check the digest against the sha2 reference implementation.
    #[arg(long)]
    pub verify: bool,

    /// Expected digest (64 hex characters); exit with status 1 on mismatch.
    #[arg(long, value_name = "HEX")]
    pub expect: Option<String>,

    /// Print the padded message to stderr as binary octets.
    #[arg(long)]
    pub dump: bool,
}

/// Execute the hash command. Returns the process exit code.
pub fn run_hash(args: &HashArgs, settings: &Settings) -> Result<u8> {
    // Parse before hashing so a typo fails fast on large inputs.
    let expected = args
        .expect
        .as_deref()
        .map(str::parse::<Digest>)
        .transpose()
        .context("--expect is not a valid SHA-256 digest")?;

    let message = input::load_message(&args.input, args.raw)?;
    tracing::debug!(bytes = message.len(), "message loaded");

    let digest = if args.dump {
        let padded = padding::pad(&message)?;
        tracing::debug!(blocks = padded.block_count(), "dumping padded message");
        eprint!(
            "{}",
            dump::render_binary(padded.as_bytes(), " ", dump::BYTES_PER_ROW)
        );
        fips256_core::sha256_padded(&padded)
    } else {
        fips256_core::sha256(&message)?
    };
    tracing::info!(%digest, bytes = message.len(), "computed digest");

    if args.verify || settings.verify {
        verify::check_against_reference(&message, &digest)?;
    }

    let format = args.format.unwrap_or(settings.format);
    println!("{}", output::render(&digest, message.len(), format)?);

    match expected {
        Some(expected) if expected != digest => {
            tracing::error!(%expected, actual = %digest, "digest does not match expected value");
            Ok(1)
        }
        _ => Ok(0),
    }
}
