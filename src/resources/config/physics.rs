use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{GRAVITY, MAX_TIMESTEP, MIN_GROUND_CLEARANCE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Delta times above this are clamped before integration [s]
    pub max_delta_time: f64,
    /// Downward acceleration while airborne [u/s^2]
    pub gravity: f64,
    /// Lowest allowed body height; the ground plane has no geometry [u]
    pub min_ground_clearance: f64,
    pub start_position: Vector3<f64>,
    pub start_yaw: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_delta_time: MAX_TIMESTEP,
            gravity: GRAVITY,
            min_ground_clearance: MIN_GROUND_CLEARANCE,
            start_position: Vector3::new(0.0, MIN_GROUND_CLEARANCE, 0.0),
            start_yaw: 0.0,
        }
    }
}

impl PhysicsConfig {
    /// Clamp a host delta time into `[0, max_delta_time]`; non-finite input
    /// becomes zero.
    pub fn clamp_delta_time(&self, dt: f64) -> f64 {
        if !dt.is_finite() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_delta_time.min(MAX_TIMESTEP).max(0.0))
    }
}
