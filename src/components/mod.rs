pub mod collision;
pub mod presentation;
pub mod road;
pub mod spatial;
pub mod track;
pub mod vehicle;

pub use collision::{BoundingBox, CollisionReport, CollisionResponse, EffectTag};
pub use presentation::ChassisPose;
pub use road::{Collectible, Lane, Obstacle, RoadSegment};
pub use spatial::HeadingFrame;
pub use track::{ControlPoint, TrackDefinition};
pub use vehicle::{ControlState, HandlingConfig, InputFlags, VehicleConfig, VehicleState, Wheel};
