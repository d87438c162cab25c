use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::stack::MAX_STACK_LEN;
use super::{Color, Stack};

/// Produces random target stacks.
///
/// Heights are drawn uniformly from the configured range and every layer is
/// drawn independently from [`Color::ALL`], so single-color stacks are possible.
pub struct RoundGenerator {
    rng: StdRng,
    heights: RangeInclusive<usize>,
}

impl RoundGenerator {
    /// Generator seeded from the OS with the default 1..=5 heights.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng(), 1, MAX_STACK_LEN)
    }

    /// Deterministic generator for tests and replayable games.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), 1, MAX_STACK_LEN)
    }

    /// Generator over an explicit height range. A zero minimum is raised to 1
    /// and the maximum is never below the minimum.
    pub fn with_rng(rng: StdRng, min_height: usize, max_height: usize) -> Self {
        let min = min_height.max(1);
        let max = max_height.max(min);
        RoundGenerator {
            rng,
            heights: min..=max,
        }
    }

    /// Draw a fresh target stack
    pub fn generate(&mut self) -> Stack {
        let height = self.rng.random_range(self.heights.clone());
        (0..height)
            .map(|_| Color::ALL[self.rng.random_range(0..Color::ALL.len())])
            .collect()
    }
}

impl Default for RoundGenerator {
    fn default() -> Self {
        Self::new()
    }
}
