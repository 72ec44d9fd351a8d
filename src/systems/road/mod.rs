mod query;
mod recycler;
mod spawner;

pub use query::RoadQuery;
pub use recycler::{maintain_road, road_maintenance_system, update_turn_ahead, MaintenanceReport};
pub use spawner::{spawn_entities, spawn_system, SpawnReport};
