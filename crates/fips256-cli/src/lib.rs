//! # fips256-cli — Command-Line Front End
//!
//! Reads a message from literal text or a file, hands the bytes to
//! [`fips256_core::sha256`], and prints the digest.
//!
//! ```bash
//! fips256 --text abc
//! fips256 --file notes.txt --format json
//! fips256 --file image.png --raw --verify
//! fips256 --text abc --expect ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the hashing logic; handlers only
//!   move bytes in and digests out.
//! - Logging goes to stderr. Stdout carries only the rendered digest.

pub mod config;
pub mod dump;
pub mod hash;
pub mod input;
pub mod output;
pub mod verify;

pub use config::{ConfigError, Overrides, Settings};
pub use hash::{run_hash, HashArgs};
pub use output::OutputFormat;
