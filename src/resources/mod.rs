pub mod config;
mod events;
mod maintenance;
mod race;
mod road_state;

pub use config::{
    EntitySpawnConfig, PhysicsConfig, RoadConfig, SimulationConfig, SimulationConfigBuilder,
    SpawnConfig,
};
pub use events::{RaceEvent, RaceEventKind};
pub use maintenance::{MaintenancePlan, MaintenanceSchedule};
pub use race::{RaceClock, RaceRng};
pub use road_state::{RoadState, WorldState};
