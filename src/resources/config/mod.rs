pub mod physics;
pub mod road;
pub mod simulation;

pub use physics::PhysicsConfig;
pub use road::{EntitySpawnConfig, RoadConfig, SpawnConfig};
pub use simulation::{SimulationConfig, SimulationConfigBuilder};
