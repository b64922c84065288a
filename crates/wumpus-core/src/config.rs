//! Configuration for a run of hunts.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration shared by every hunt a host starts.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible caves. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the RNG seed.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the RNG that caves are drawn from.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
