mod config;
mod controls;
mod state;

pub use config::{HandlingConfig, VehicleConfig};
pub use controls::{ControlState, InputFlags};
pub use state::{VehicleState, Wheel};
