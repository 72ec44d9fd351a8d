use serde::{Deserialize, Serialize};

use crate::components::ControlState;
use crate::utils::WHEEL_COUNT;

/// Opt-in per-frame diagnostics. Only filled when the caller passes one in.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameTrace {
    pub dt: f64,
    pub controls: ControlState,
    pub effective_steering: f64,
    pub tractive_force: f64,
    pub drag_force: f64,
    pub rolling_force: f64,
    pub forward_acceleration: f64,
    pub angular_acceleration: f64,
    pub traction_loss: f64,
    pub spring_forces: [f64; WHEEL_COUNT],
    pub grounded: bool,
    pub off_road: bool,
}
