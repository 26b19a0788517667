//! # fips256 CLI entry point
//!
//! Parses command-line arguments, initialises logging and dispatches to
//! the hash command.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fips256_cli::{run_hash, HashArgs, Overrides, Settings};

/// Compute the SHA-256 digest of text or a file.
#[derive(Parser, Debug)]
#[command(name = "fips256", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    hash: HashArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG, when set, overrides the -v level.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("fips256 v{} starting", env!("CARGO_PKG_VERSION"));

    let overrides = Overrides {
        format: cli.hash.format,
        verify: cli.hash.verify,
    };
    let result = Settings::from_env(overrides)
        .map_err(anyhow::Error::from)
        .and_then(|settings| {
            tracing::debug!(?settings, "loaded settings");
            run_hash(&cli.hash, &settings)
        });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
