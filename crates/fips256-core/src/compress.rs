//! # Compression Function
//!
//! Runs the 64 SHA-256 rounds (FIPS 180-4 §6.2.2 steps 2-3) over eight
//! working registers seeded from the current hash state. The result is the
//! block's contribution; adding it into the state is [`HashState::accumulate`].
//!
//! [`HashState::accumulate`]: crate::state::HashState::accumulate

use crate::constants::ROUND_CONSTANTS;
use crate::schedule::MessageSchedule;
use crate::state::HashState;

/// `Ch(x, y, z) = (x ∧ y) ⊕ (¬x ∧ z)`
#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// `Maj(x, y, z) = (x ∧ y) ⊕ (x ∧ z) ⊕ (y ∧ z)`
#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// `Σ0(x) = ROTR2(x) ⊕ ROTR13(x) ⊕ ROTR22(x)`
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// `Σ1(x) = ROTR6(x) ⊕ ROTR11(x) ⊕ ROTR25(x)`
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// The working registers `a..h`, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingRegisters([u32; 8]);

impl WorkingRegisters {
    /// Seed the registers from a hash state.
    pub fn from_state(state: &HashState) -> Self {
        Self(*state.words())
    }

    /// Register values `[a, b, c, d, e, f, g, h]`.
    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Apply one round with round constant `k` and schedule word `w`.
    #[inline(always)]
    pub fn round(self, k: u32, w: u32) -> Self {
        let [a, b, c, d, e, f, g, h] = self.0;
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k)
            .wrapping_add(w);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        Self([t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g])
    }
}

/// Compress one block's schedule against the current state.
pub fn compress(state: &HashState, schedule: &MessageSchedule) -> WorkingRegisters {
    ROUND_CONSTANTS
        .iter()
        .zip(schedule.words())
        .fold(WorkingRegisters::from_state(state), |regs, (&k, &w)| {
            regs.round(k, w)
        })
}
