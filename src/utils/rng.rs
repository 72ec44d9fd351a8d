use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Stream used for the collision-response angular kick.
pub const COLLISION_STREAM: &str = "collision";
/// Stream used for obstacle and collectible placement.
pub const SPAWNER_STREAM: &str = "spawner";

/// Derives independent, reproducible RNG streams from one master seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    /// Uses the given seed, or draws one from entropy and logs it so the run
    /// can be replayed.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        let seed = match seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                warn!("No seed provided, using random master seed {}", seed);
                seed
            }
        };
        Self::new(seed)
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    // Get a new RNG for a stream by hashing its name with master seed
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}
