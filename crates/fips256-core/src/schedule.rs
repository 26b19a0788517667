//! # Message Schedule Expansion
//!
//! Derives the 64-word schedule `W` for one block (FIPS 180-4 §6.2.2 step 1).
//! Words 0..16 are the block read as big-endian `u32`s; words 16..64 mix
//! four earlier words with the small sigma functions.

use crate::constants::ROUNDS;
use crate::padding::Block;

/// `σ0(x) = ROTR7(x) ⊕ ROTR18(x) ⊕ SHR3(x)`
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// `σ1(x) = ROTR17(x) ⊕ ROTR19(x) ⊕ SHR10(x)`
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// The 64-word message schedule of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageSchedule([u32; ROUNDS]);

impl MessageSchedule {
    /// Expand a block into its message schedule.
    pub fn expand(block: &Block) -> Self {
        let mut w = [0u32; ROUNDS];
        for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }
        for t in 16..ROUNDS {
            w[t] = w[t - 16]
                .wrapping_add(small_sigma0(w[t - 15]))
                .wrapping_add(w[t - 7])
                .wrapping_add(small_sigma1(w[t - 2]));
        }
        Self(w)
    }

    /// All 64 words, in round order.
    pub fn words(&self) -> &[u32; ROUNDS] {
        &self.0
    }

    /// Word for round `t`.
    #[inline(always)]
    pub fn word(&self, t: usize) -> u32 {
        self.0[t]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding::pad;

    fn abc_block() -> Block {
        pad(b"abc").unwrap().blocks().next().unwrap()
    }

    #[test]
    fn leading_words_are_big_endian_block_words() {
        let schedule = MessageSchedule::expand(&abc_block());
        assert_eq!(schedule.word(0), 0x61626380);
        assert!(schedule.words()[1..15].iter().all(|&w| w == 0));
        assert_eq!(schedule.word(15), 0x00000018);
    }

    #[test]
    fn derived_words_match_published_abc_trace() {
        // Intermediate values from the FIPS 180-4 "abc" worked example.
        let schedule = MessageSchedule::expand(&abc_block());
        assert_eq!(schedule.word(16), 0x61626380);
        assert_eq!(schedule.word(17), 0x000f0000);
        assert_eq!(schedule.word(18), 0x7da86405);
        assert_eq!(schedule.word(63), 0x12b1edeb);
    }

    #[test]
    fn sigma_functions_use_shift_not_rotate() {
        // The shifted-out low bits must not wrap into the high end.
        assert_eq!(small_sigma0(1), 0x0200_4000);
        assert_eq!(small_sigma1(1), 0x0000_a000);
    }

    #[test]
    fn expansion_wraps_modulo_2_32() {
        let block = [0xffu8; 64];
        let schedule = MessageSchedule::expand(&block);
        let expected = 0xffff_ffffu32
            .wrapping_add(small_sigma0(0xffff_ffff))
            .wrapping_add(0xffff_ffff)
            .wrapping_add(small_sigma1(0xffff_ffff));
        assert_eq!(schedule.word(16), expected);
    }
}
