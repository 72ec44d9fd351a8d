pub mod components;
pub mod plugins;
pub mod resources;
pub mod session;
pub mod systems;
pub mod utils;

pub use components::{
    BoundingBox, ChassisPose, CollisionReport, CollisionResponse, EffectTag, HandlingConfig,
    InputFlags, TrackDefinition, VehicleConfig, VehicleState,
};
pub use plugins::{RacePlugin, RaceSet};
pub use resources::{RaceEvent, RaceEventKind, RoadState, SimulationConfig};
pub use session::{RaceSession, TickReport};
pub use systems::{advance_vehicle, FrameTrace, RoadQuery, StepOutcome};
pub use utils::ConfigError;
