use nalgebra::Vector3;

use super::force_calculator::DriveMode;
use crate::components::{VehicleConfig, VehicleState};
use crate::resources::PhysicsConfig;

/// Accelerations gathered by the force stages for one step.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameAccelerations {
    /// Along the heading [u/s²]
    pub forward: f64,
    /// Drift contribution, world space
    pub lateral: Vector3<f64>,
    /// Yaw [rad/s²]
    pub angular: f64,
    pub mode: DriveMode,
}

/// Semi-implicit Euler step over the heading-split velocity.
///
/// Forward speed and lateral slip are advanced separately. The slip is scrubbed
/// by a fixed factor each frame instead of being cancelled outright, which is
/// what lets a drift carry.
pub fn integrate_state(
    state: &mut VehicleState,
    accelerations: &FrameAccelerations,
    config: &VehicleConfig,
    physics: &PhysicsConfig,
    dt: f64,
) {
    let direction = state.direction();
    let horizontal = Vector3::new(state.velocity.x, 0.0, state.velocity.z);
    let forward = horizontal.dot(&direction);
    let lateral = horizontal - direction * forward;

    let mut speed = forward + accelerations.forward * dt;
    if accelerations.mode.is_retarding() && forward != 0.0 && speed * forward < 0.0 {
        speed = 0.0;
    }
    let speed = speed.clamp(-config.max_reverse_speed.abs(), config.max_speed.abs());

    let lateral = (lateral + accelerations.lateral * dt) * config.lateral_damping;

    let mut vertical = state.velocity.y;
    if !state.is_grounded {
        vertical -= physics.gravity * dt;
    }

    state.speed = speed;
    state.velocity = direction * speed + lateral + Vector3::y() * vertical;

    state.angular_velocity =
        (state.angular_velocity + accelerations.angular * dt) * config.angular_damping;
    state.yaw += state.angular_velocity * dt;

    state.position += state.velocity * dt;
    apply_ground_floor(state, physics);
}

/// Keeps the body above the ground plane, which has no collision geometry
/// of its own. Downward motion is cancelled when the clamp engages.
pub fn apply_ground_floor(state: &mut VehicleState, physics: &PhysicsConfig) {
    if state.position.y < physics.min_ground_clearance {
        state.position.y = physics.min_ground_clearance;
        state.velocity.y = state.velocity.y.max(0.0);
    }
}
