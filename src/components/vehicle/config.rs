use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{ANGULAR_DAMPING, LATERAL_DAMPING, WHEEL_COUNT};

/// Mass, powertrain, steering and chassis parameters of the player vehicle.
///
/// Force-like fields (`acceleration`, `deceleration`, `engine_braking`) are
/// divided by `mass` before being applied, so they read as newtons in game
/// units rather than as accelerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    pub mass: f64,
    pub max_speed: f64,
    pub max_reverse_speed: f64,
    /// Base tractive force before the launch multiplier.
    pub acceleration: f64,
    /// Base braking force.
    pub deceleration: f64,
    pub engine_braking: f64,
    pub drag_coefficient: f64,
    pub rolling_resistance_road: f64,
    pub rolling_resistance_offroad: f64,
    /// Throttle only drives forward while speed is at or above this value.
    pub reverse_guard: f64,

    pub max_steering_angle: f64, // radians
    pub steering_rate: f64,
    pub steering_return_rate: f64,
    pub wheelbase: f64,
    /// Below this |speed| the vehicle does not yaw.
    pub min_turn_speed: f64,

    pub wheel_radius: f64,
    pub suspension_travel: f64,
    pub suspension_stiffness: f64,
    pub suspension_damping: f64,
    /// Front-left, front-right, rear-left, rear-right in the vehicle frame
    /// (x right, y up, z forward).
    pub wheel_offsets: [Vector3<f64>; WHEEL_COUNT],

    pub angular_damping: f64,
    pub lateral_damping: f64,

    /// Hitbox half extents (right, up, forward), smaller than the model.
    pub hitbox_half_extents: Vector3<f64>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            mass: 1200.0,
            max_speed: 200.0,
            max_reverse_speed: 40.0,
            acceleration: 30000.0,
            deceleration: 12000.0,
            engine_braking: 1500.0,
            drag_coefficient: 0.15,
            rolling_resistance_road: 5.0,
            rolling_resistance_offroad: 60.0,
            reverse_guard: -0.5,
            max_steering_angle: 0.35,
            steering_rate: 2.0,
            steering_return_rate: 4.0,
            wheelbase: 5.0,
            min_turn_speed: 0.5,
            wheel_radius: 0.4,
            suspension_travel: 0.3,
            suspension_stiffness: 35000.0,
            suspension_damping: 4500.0,
            wheel_offsets: [
                Vector3::new(-0.9, 0.0, 1.4),
                Vector3::new(0.9, 0.0, 1.4),
                Vector3::new(-0.9, 0.0, -1.4),
                Vector3::new(0.9, 0.0, -1.4),
            ],
            angular_damping: ANGULAR_DAMPING,
            lateral_damping: LATERAL_DAMPING,
            hitbox_half_extents: Vector3::new(0.9, 0.6, 1.8),
        }
    }
}

impl VehicleConfig {
    pub fn half_wheelbase(&self) -> f64 {
        self.wheelbase * 0.5
    }

    /// Wheel height above the ground plane at which the spring is unloaded.
    pub fn suspension_rest_height(&self) -> f64 {
        self.wheel_radius + self.suspension_travel
    }
}

/// Empirically tuned response curves for steering, drift and off-road
/// recovery. None of these have a physical derivation; they are exposed so
/// handling can be tuned without touching the integrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlingConfig {
    /// Steering effectiveness never drops below this fraction.
    pub steering_floor: f64,
    /// Exponent of the speed ratio in the steering falloff.
    pub steering_power: f64,
    /// Multiplier under the square root of the yaw response.
    pub yaw_gain: f64,
    pub yaw_speed_factor_min: f64,

    pub drift_steer_threshold: f64,
    /// Drift starts above this fraction of max speed.
    pub drift_speed_fraction: f64,
    pub drift_loss_gain: f64,
    pub drift_loss_cap: f64,
    pub drift_speed_damping: f64,
    pub drift_lateral_gain: f64,

    pub offroad_entry_speed: f64,
    /// Speed multiplier applied once when leaving the road.
    pub offroad_entry_slowdown: f64,
    pub offroad_entry_bump: f64,
    /// Per-frame speed multiplier while off the road.
    pub offroad_speed_decay: f64,
    /// Recovery steering target as a fraction of max steering angle.
    pub recovery_bias: f64,
    pub recovery_rate: f64,
}

impl Default for HandlingConfig {
    fn default() -> Self {
        Self {
            steering_floor: 0.15,
            steering_power: 0.7,
            yaw_gain: 20.0,
            yaw_speed_factor_min: 0.2,
            drift_steer_threshold: 0.15,
            drift_speed_fraction: 0.6,
            drift_loss_gain: 0.01,
            drift_loss_cap: 0.7,
            drift_speed_damping: 2000.0,
            drift_lateral_gain: 0.15,
            offroad_entry_speed: 20.0,
            offroad_entry_slowdown: 0.9,
            offroad_entry_bump: 2.5,
            offroad_speed_decay: 0.995,
            recovery_bias: 0.4,
            recovery_rate: 1.5,
        }
    }
}
