//! # Error Types
//!
//! The hashing pipeline is total over valid input. The only intrinsic
//! failure is a message whose bit length cannot be encoded in the 64-bit
//! length field; digest parsing adds a second, unrelated failure.

use thiserror::Error;

/// Errors from the SHA-256 pipeline and digest parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The message bit length does not fit in the 64-bit length field.
    #[error("message of {len} bytes is too long: bit length must fit in 64 bits (at most {max} bytes)")]
    MessageTooLong {
        /// Length of the rejected message in bytes.
        len: u64,
        /// Largest accepted length in bytes.
        max: u64,
    },

    /// A hex digest string was malformed.
    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}
