mod detection;
mod response;

pub use detection::{check_collisions, collision_events, collision_system};
pub use response::{collide_with_obstacle, vehicle_bounding_box};
