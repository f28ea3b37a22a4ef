//! Deterministic simulation-level RNG wrapper.
//!
//! The only randomness in a run is the day-0 battery draw, so a single
//! `SmallRng` seeded from `SimulationConfig::seed` is enough.  Batch runs
//! build one `SimRng` per seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.  The same seed always yields the same draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
