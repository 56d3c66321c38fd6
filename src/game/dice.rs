//! Random sources for dice, starting garrisons and mission draws.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Faces on a die.
pub const DIE_SIDES: u32 = 6;

/// Source of uniform random integers.
///
/// Everything random in a game flows through one of these, so a session can
/// be replayed from a seed or driven by scripted values in tests.
pub trait DiceSource {
    /// Uniform integer in `low..=high`. Requires `low <= high`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Roll one six-sided die.
    fn roll_die(&mut self) -> u8 {
        u8::try_from(self.next_in_range(1, DIE_SIDES)).unwrap_or(1)
    }

    /// Roll `count` dice.
    fn roll_dice(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.roll_die()).collect()
    }
}

/// Seeded dice backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct Dice {
    seed: u64,
    rng: StdRng,
}

impl Dice {
    /// Create dice that replay the same sequence for the same seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create dice seeded from the system clock.
    #[must_use]
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    /// The seed these dice were created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for Dice {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}

/// A seed derived from the current time.
#[must_use]
pub fn time_seed() -> u64 {
    // Nanoseconds since the epoch, wrapped into 64 bits
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| {
            d.as_secs()
                .wrapping_mul(1_000_000_000)
                .wrapping_add(u64::from(d.subsec_nanos()))
        })
        .unwrap_or(42)
}

/// Dice that replay a fixed script of values.
///
/// Each draw pops the next scripted value and clamps it into the requested
/// range. Once the script is exhausted every draw returns `low`.
#[derive(Debug, Clone, Default)]
pub struct LoadedDice {
    script: VecDeque<u32>,
}

impl LoadedDice {
    /// Create dice that return `values` in order.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DiceSource for LoadedDice {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.script.pop_front().map_or(low, |v| v.clamp(low, high))
    }
}
