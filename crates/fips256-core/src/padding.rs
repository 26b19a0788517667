//! # Message Padding and Block Splitting
//!
//! Extends a message to a whole number of 512-bit blocks (FIPS 180-4 §5.1.1):
//!
//! 1. append a single `0x80` byte,
//! 2. append `0x00` bytes until the length is 56 mod 64 bytes,
//! 3. append the original bit length as a big-endian `u64`.
//!
//! ## Invariants
//!
//! A [`PaddedMessage`] can only be built by [`pad()`], so its length is
//! always a non-zero multiple of [`BLOCK_LEN`] and its last eight bytes
//! always hold the original bit length.

use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN, MAX_MESSAGE_LEN};
use crate::error::HashError;

/// One 512-bit block of a padded message.
pub type Block = [u8; BLOCK_LEN];

/// The padding marker appended directly after the message content.
const MARKER: u8 = 0x80;

/// A message extended to a whole number of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
}

impl PaddedMessage {
    /// The padded bytes, including the marker, zero fill and length field.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the padded message in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: even the empty message pads to one block.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of 64-byte blocks.
    pub fn block_count(&self) -> usize {
        self.bytes.len() / BLOCK_LEN
    }

    /// Split into consecutive blocks, in message order.
    ///
    /// The length invariant makes this an exact partition; no remainder is
    /// ever dropped.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.bytes.chunks_exact(BLOCK_LEN).map(|chunk| {
            let mut block = [0u8; BLOCK_LEN];
            block.copy_from_slice(chunk);
            block
        })
    }
}

/// Bit length of a message of `len` bytes, as stored in the length field.
///
/// # Errors
///
/// Returns [`HashError::MessageTooLong`] if `8 * len` does not fit in a
/// `u64`. The length field is never truncated.
pub fn bit_length(len: usize) -> Result<u64, HashError> {
    u64::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or_else(|| too_long(len))
}

/// Total padded length in bytes for a message of `len` bytes: the smallest
/// multiple of 64 that is at least `len + 1 + 8`.
pub fn padded_len(len: usize) -> Result<usize, HashError> {
    len.checked_add(1 + LENGTH_FIELD_LEN + BLOCK_LEN - 1)
        .map(|n| n / BLOCK_LEN * BLOCK_LEN)
        .ok_or_else(|| too_long(len))
}

/// Pad `message` to a whole number of blocks.
///
/// # Errors
///
/// Returns [`HashError::MessageTooLong`] if the message bit length does not
/// fit in 64 bits or the padded length overflows `usize`.
pub fn pad(message: &[u8]) -> Result<PaddedMessage, HashError> {
    let bit_len = bit_length(message.len())?;
    let total = padded_len(message.len())?;

    let mut bytes = Vec::with_capacity(total);
    bytes.extend_from_slice(message);
    bytes.push(MARKER);
    bytes.resize(total - LENGTH_FIELD_LEN, 0x00);
    bytes.extend_from_slice(&bit_len.to_be_bytes());
    debug_assert_eq!(bytes.len() % BLOCK_LEN, 0);

    Ok(PaddedMessage { bytes })
}

fn too_long(len: usize) -> HashError {
    HashError::MessageTooLong {
        len: u64::try_from(len).unwrap_or(u64::MAX),
        max: MAX_MESSAGE_LEN,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Padding always yields whole blocks with the marker, zero fill
        /// and big-endian length in place.
        #[test]
        fn padding_is_well_formed(message in prop::collection::vec(any::<u8>(), 0..300)) {
            let padded = pad(&message).unwrap();
            let bytes = padded.as_bytes();
            prop_assert_eq!(bytes.len() % BLOCK_LEN, 0);
            prop_assert_eq!(&bytes[..message.len()], &message[..]);
            prop_assert_eq!(bytes[message.len()], 0x80);
            prop_assert!(bytes[message.len() + 1..bytes.len() - 8].iter().all(|&b| b == 0));
            let mut tail = [0u8; 8];
            tail.copy_from_slice(&bytes[bytes.len() - 8..]);
            prop_assert_eq!(u64::from_be_bytes(tail), message.len() as u64 * 8);
        }

        /// The padded length is the smallest block multiple that fits the
        /// marker and the length field.
        #[test]
        fn padding_is_minimal(len in 0usize..10_000) {
            let total = padded_len(len).unwrap();
            prop_assert!(total >= len + 9);
            prop_assert!(total - (len + 9) < BLOCK_LEN);
        }
    }
}
