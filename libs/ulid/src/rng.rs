//! Per-thread randomness for identifier creation.
//!
//! Each thread owns one xorshift generator, created on first use and seeded
//! once from the operating system entropy source. The generator never leaves
//! its thread and is only touched synchronously within a single fill, so no
//! locking is involved. Distribution quality, not cryptographic strength, is
//! the requirement here; only the timestamp field carries the ordering
//! guarantee.

use std::cell::RefCell;

use rand::rngs::OsRng;
use rand::TryRngCore;

/// Fallback state for a zero seed. An all-zero xorshift state is a fixed
/// point and would output 0 forever.
const DEFAULT_SEED: u64 = 88172645463325252;

/// A 64-bit xorshift pseudo-random generator.
#[derive(Debug, Clone)]
pub(crate) struct XorShift64 {
    x: u64,
}

impl XorShift64 {
    pub(crate) fn new(seed: u64) -> Self {
        let x = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { x }
    }

    /// Creates a generator seeded from OS entropy.
    fn from_entropy() -> Self {
        Self::new(OsRng.try_next_u64().unwrap_or(DEFAULT_SEED))
    }

    /// Advances the state twice and returns it.
    pub(crate) fn next(&mut self) -> u64 {
        self.x ^= self.x << 7;
        self.x ^= self.x >> 9;
        self.x
    }
}

thread_local! {
    static GENERATOR: RefCell<XorShift64> = RefCell::new(XorShift64::from_entropy());
}

/// Fills a 10-byte randomness buffer from the calling thread's generator.
///
/// Two 64-bit draws per fill: the first contributes its two low-order bytes
/// to positions 0-1, the second covers positions 2-9.
pub(crate) fn fill_randomness(out: &mut [u8; 10]) {
    GENERATOR.with(|generator| {
        let mut generator = generator.borrow_mut();
        let first = generator.next().to_le_bytes();
        let second = generator.next().to_le_bytes();
        out[0] = first[0];
        out[1] = first[1];
        out[2..].copy_from_slice(&second);
    });
}
