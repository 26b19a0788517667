//! # fips256-core — SHA-256 Hashing Pipeline
//!
//! Computes the SHA-256 digest of an arbitrary byte sequence, bit-exact
//! with FIPS 180-4. The pipeline is split into the stages of the standard
//! so each one can be inspected and tested on its own:
//!
//! 1. **Padding** ([`padding::pad`]): append `0x80`, zero fill to
//!    448 mod 512 bits, append the 64-bit big-endian bit length.
//! 2. **Block splitting** ([`PaddedMessage::blocks`]): consecutive
//!    64-byte blocks, in order.
//! 3. **Schedule expansion** ([`MessageSchedule::expand`]): 64 words
//!    per block.
//! 4. **Compression** ([`compress::compress`]): 64 rounds over eight
//!    working registers.
//! 5. **Accumulation** ([`HashState::accumulate`]): the only state
//!    carried between blocks.
//! 6. **Digest assembly** ([`Digest::from_state`]): big-endian
//!    concatenation of the final state.
//!
//! The whole computation is a left fold over blocks:
//!
//! ```text
//! state_0 = INITIAL_STATE
//! state_n = accumulate(state_{n-1}, compress(state_{n-1}, expand(block_n)))
//! digest  = assemble(state_last)
//! ```
//!
//! ## Crate Policy
//!
//! - No I/O, no logging, no global mutable state. Constant tables are
//!   `'static` and read-only.
//! - All 32-bit arithmetic uses `u32::wrapping_add`.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod compress;
pub mod constants;
pub mod digest;
pub mod error;
pub mod padding;
pub mod schedule;
pub mod state;

pub use compress::WorkingRegisters;
pub use constants::{BLOCK_LEN, DIGEST_LEN, MAX_MESSAGE_LEN};
pub use digest::Digest;
pub use error::HashError;
pub use padding::{Block, PaddedMessage};
pub use schedule::MessageSchedule;
pub use state::HashState;

/// Compute the SHA-256 digest of `message`.
///
/// # Errors
///
/// Returns [`HashError::MessageTooLong`] if the bit length of `message`
/// does not fit in the 64-bit length field.
pub fn sha256(message: &[u8]) -> Result<Digest, HashError> {
    padding::pad(message).map(|padded| sha256_padded(&padded))
}

/// Compute the digest of a message that has already been padded.
pub fn sha256_padded(padded: &PaddedMessage) -> Digest {
    let state = padded
        .blocks()
        .fold(HashState::initial(), |state, block| {
            let schedule = MessageSchedule::expand(&block);
            let registers = compress::compress(&state, &schedule);
            state.accumulate(&registers)
        });
    Digest::from_state(&state)
}

/// Compute the SHA-256 digest of `message` as 64 lowercase hex characters.
pub fn sha256_hex(message: &[u8]) -> Result<String, HashError> {
    sha256(message).map(|digest| digest.to_hex())
}
