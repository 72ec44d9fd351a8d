use nalgebra::Vector3;
use roadracer::{
    components::TrackDefinition,
    resources::{EntitySpawnConfig, RoadConfig, SimulationConfig, SpawnConfig},
};

pub const TEST_SEED: u64 = 42;
pub const TEST_DT: f64 = 1.0 / 60.0;

/// Default tuning with a fixed seed.
pub fn create_test_config() -> SimulationConfig {
    SimulationConfig::default().with_seed(TEST_SEED)
}

/// A dead straight road and no roadside entities, for isolating the vehicle.
pub fn create_straight_config() -> SimulationConfig {
    let mut config = create_test_config();
    config.road = RoadConfig {
        track: TrackDefinition::straight(6000.0, 24.0),
        ..Default::default()
    };
    config.spawn = create_empty_spawn_config();
    config
}

/// Spawn settings that never place anything.
pub fn create_empty_spawn_config() -> SpawnConfig {
    let never = |defaults: EntitySpawnConfig| EntitySpawnConfig {
        max_alive: 0,
        ..defaults
    };
    let defaults = SpawnConfig::default();
    SpawnConfig {
        obstacles: never(defaults.obstacles.clone()),
        collectibles: never(defaults.collectibles.clone()),
        ..defaults
    }
}

/// Obstacles only, always dead ahead in a narrow window.
pub fn create_obstacle_alley_config() -> SimulationConfig {
    let mut config = create_straight_config();
    let defaults = SpawnConfig::default();
    config.spawn = SpawnConfig {
        obstacles: EntitySpawnConfig {
            interval: 0.25,
            max_alive: 12,
            min_ahead: 80.0,
            max_ahead: 90.0,
            height: 1.0,
            half_extents: Vector3::new(20.0, 1.0, 1.0),
        },
        collectibles: EntitySpawnConfig {
            max_alive: 0,
            ..defaults.collectibles.clone()
        },
        obstacle_min_spacing: 5.0,
        ..defaults
    };
    config
}
