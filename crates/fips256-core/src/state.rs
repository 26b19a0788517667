//! # Hash State
//!
//! The eight 32-bit words threaded from one block to the next. Each
//! computation owns its own state value; nothing is shared between
//! messages.

use crate::compress::WorkingRegisters;
use crate::constants::INITIAL_STATE;

/// Running hash state `H0..H7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState([u32; 8]);

impl HashState {
    /// The standard initial state.
    pub fn initial() -> Self {
        Self(INITIAL_STATE)
    }

    /// State words `[H0, .., H7]`.
    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Add a block's final working registers into the state, word by word,
    /// modulo 2^32 (`a` into `H0` through `h` into `H7`).
    #[must_use]
    pub fn accumulate(self, registers: &WorkingRegisters) -> Self {
        let mut words = self.0;
        for (word, &reg) in words.iter_mut().zip(registers.words()) {
            *word = word.wrapping_add(reg);
        }
        Self(words)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

impl From<[u32; 8]> for HashState {
    fn from(words: [u32; 8]) -> Self {
        Self(words)
    }
}
