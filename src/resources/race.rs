use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::utils::{RngManager, COLLISION_STREAM, SPAWNER_STREAM};

/// Tick counter and accumulated simulated time.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct RaceClock {
    pub tick: u64,
    pub elapsed: f64,
}

impl RaceClock {
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed += dt;
    }
}

/// Independent random streams. The vehicle integrator never draws from
/// these, so driving trajectories stay deterministic.
#[derive(Resource, Debug, Clone)]
pub struct RaceRng {
    pub collision: ChaCha8Rng,
    pub spawner: ChaCha8Rng,
    pub master_seed: u64,
}

impl RaceRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        let manager = RngManager::from_optional_seed(seed);
        Self {
            collision: manager.get_rng(COLLISION_STREAM),
            spawner: manager.get_rng(SPAWNER_STREAM),
            master_seed: manager.master_seed(),
        }
    }
}
