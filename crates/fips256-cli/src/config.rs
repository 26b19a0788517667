//! Environment defaults for the CLI.
//!
//! Flags on the command line always win; these only fill in what the
//! invocation leaves unset.

use clap::ValueEnum;

use crate::output::OutputFormat;

/// Environment variable selecting the default output format.
pub const FORMAT_VAR: &str = "FIPS256_FORMAT";

/// Environment variable enabling the sha2 reference check by default.
pub const VERIFY_VAR: &str = "FIPS256_VERIFY";

/// Values already fixed on the command line. An environment variable is
/// neither read nor validated when its flag is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--format`, if given.
    pub format: Option<OutputFormat>,
    /// `--verify` was passed.
    pub verify: bool,
}

/// Settings resolved from flags and the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Output format used when `--format` is absent.
    pub format: OutputFormat,
    /// Cross-check every digest against the reference implementation.
    pub verify: bool,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// Variables:
    /// - `FIPS256_FORMAT` (`hex` or `json`, default: `hex`)
    /// - `FIPS256_VERIFY` (`1`/`true`/`yes` or `0`/`false`/`no`, default: off)
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok(), overrides)
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let format = match (overrides.format, lookup(FORMAT_VAR)) {
            (Some(format), _) => format,
            (None, Some(raw)) => OutputFormat::from_str(raw.trim(), true)
                .map_err(|_| ConfigError::InvalidFormat(raw))?,
            (None, None) => OutputFormat::default(),
        };
        let verify = match (overrides.verify, lookup(VERIFY_VAR)) {
            (true, _) => true,
            (false, Some(raw)) => parse_flag(VERIFY_VAR, &raw)?,
            (false, None) => false,
        };
        Ok(Self { format, verify })
    }
}

fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: var.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid FIPS256_FORMAT value {0:?}: expected \"hex\" or \"json\"")]
    InvalidFormat(String),
    #[error("invalid {var} value {value:?}: expected a boolean")]
    InvalidFlag { var: String, value: String },
}
