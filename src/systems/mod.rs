pub mod collisions;
pub mod physics;
mod presentation;
pub mod road;

pub use collisions::{
    check_collisions, collide_with_obstacle, collision_system, vehicle_bounding_box,
};
pub use physics::{advance_vehicle, vehicle_physics_system, FrameTrace, StepOutcome};
pub use presentation::{chassis_pose, chassis_pose_system};
pub use road::{
    maintain_road, road_maintenance_system, spawn_entities, spawn_system, update_turn_ahead,
    MaintenanceReport, RoadQuery, SpawnReport,
};
