//! Configuration for how random generators are seeded.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeding configuration for a die's random generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollerConfig {
    /// Fixed RNG seed. `None` seeds from operating-system entropy.
    pub seed: Option<u64>,
}

impl RollerConfig {
    /// Use a fixed seed for reproducible rolls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed from operating-system entropy.
    pub fn with_entropy(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Build a generator according to this configuration.
    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
