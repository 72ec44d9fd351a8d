use nalgebra::Vector3;

use crate::components::{HandlingConfig, VehicleConfig, VehicleState};
use crate::utils::{
    sign_or_zero, BRAKE_MULTIPLIER, LAUNCH_EXPONENT, LAUNCH_FLOOR, LAUNCH_GAIN,
    REVERSE_ACCEL_MULTIPLIER, REVERSE_BRAKE_MULTIPLIER, REVERSE_BRAKE_SPEED,
    REVERSE_STOP_MULTIPLIER,
};

/// Which branch of the longitudinal arbitration produced the tractive force.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DriveMode {
    Throttle,
    Brake,
    /// Reverse held while still rolling forward
    ReverseBraking,
    Reverse,
    #[default]
    Coast,
    Airborne,
}

impl DriveMode {
    /// Branches that only ever slow the car; they must not push it through zero.
    pub fn is_retarding(&self) -> bool {
        matches!(self, Self::Brake | Self::ReverseBraking | Self::Coast)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LongitudinalForces {
    pub mode: DriveMode,
    pub tractive: f64,
    pub drag: f64,
    pub rolling: f64,
}

impl LongitudinalForces {
    pub fn total(&self) -> f64 {
        self.tractive + self.drag + self.rolling
    }

    pub fn acceleration(&self, mass: f64) -> f64 {
        if mass > 0.0 {
            self.total() / mass
        } else {
            0.0
        }
    }
}

/// Arcade launch curve: ~2.0 at standstill, ~1.26 at half speed and 0.2 at
/// the top, so the car jumps off the line but tapers near its limit.
pub fn launch_multiplier(speed: f64, max_speed: f64) -> f64 {
    let ratio = if max_speed > 0.0 {
        (speed / max_speed).clamp(0.0, 1.0)
    } else {
        1.0
    };
    LAUNCH_GAIN * (1.0 - ratio).powf(LAUNCH_EXPONENT) + LAUNCH_FLOOR
}

/// Tractive, drag and rolling-resistance forces along the heading.
///
/// Arbitration order: brake, throttle, reverse, engine braking. Tractive
/// force only acts while grounded. In the air nothing acts along the
/// heading, so the car carries its speed until it lands.
pub fn longitudinal_forces(state: &VehicleState, config: &VehicleConfig) -> LongitudinalForces {
    let speed = state.speed;
    let sign = sign_or_zero(speed);
    let controls = &state.controls;

    let (mode, tractive) = if !state.is_grounded {
        (DriveMode::Airborne, 0.0)
    } else if controls.brake_active() {
        (
            DriveMode::Brake,
            -sign * config.deceleration * BRAKE_MULTIPLIER * controls.brake,
        )
    } else if controls.throttle_active() && speed >= config.reverse_guard {
        (
            DriveMode::Throttle,
            config.acceleration * launch_multiplier(speed, config.max_speed) * controls.throttle,
        )
    } else if controls.reverse_active() {
        if speed > REVERSE_BRAKE_SPEED {
            (
                DriveMode::ReverseBraking,
                -config.deceleration * REVERSE_BRAKE_MULTIPLIER,
            )
        } else if speed > 0.0 {
            (
                DriveMode::ReverseBraking,
                -config.deceleration * REVERSE_STOP_MULTIPLIER,
            )
        } else {
            (
                DriveMode::Reverse,
                -config.acceleration * REVERSE_ACCEL_MULTIPLIER * controls.reverse,
            )
        }
    } else {
        (DriveMode::Coast, -sign * config.engine_braking)
    };

    if !state.is_grounded {
        return LongitudinalForces {
            mode,
            ..Default::default()
        };
    }

    let rolling_coefficient = if state.is_off_road {
        config.rolling_resistance_offroad
    } else {
        config.rolling_resistance_road
    };

    LongitudinalForces {
        mode,
        tractive,
        drag: -sign * config.drag_coefficient * speed * speed,
        rolling: -rolling_coefficient * speed,
    }
}

/// Yaw and drift contributions for one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Cornering {
    pub angular_acceleration: f64,
    /// Fraction of grip lost to drift, 0 when not drifting
    pub traction_loss: f64,
    /// World-space lateral acceleration from drift
    pub lateral_acceleration: Vector3<f64>,
}

/// Square-root yaw response plus the high-speed drift mechanic.
pub fn cornering(
    state: &VehicleState,
    effective_steering: f64,
    config: &VehicleConfig,
    handling: &HandlingConfig,
) -> Cornering {
    let mut result = Cornering {
        lateral_acceleration: Vector3::zeros(),
        ..Default::default()
    };

    let abs_speed = state.speed.abs();
    if !state.is_grounded || abs_speed <= config.min_turn_speed {
        return result;
    }

    let half_wheelbase = config.half_wheelbase();
    if half_wheelbase > 0.0 {
        let ratio = if config.max_speed > 0.0 {
            abs_speed / config.max_speed
        } else {
            1.0
        };
        let speed_factor = (1.0 - ratio).clamp(handling.yaw_speed_factor_min, 1.0);
        let reverse_sign = if state.speed < 0.0 { -1.0 } else { 1.0 };

        result.angular_acceleration = (effective_steering / half_wheelbase)
            * (abs_speed * handling.yaw_gain).sqrt()
            * speed_factor
            * reverse_sign;
    }

    let steer = state.steering_angle;
    if steer.abs() > handling.drift_steer_threshold
        && abs_speed > config.max_speed * handling.drift_speed_fraction
    {
        let damping = 1.0 + abs_speed / handling.drift_speed_damping.max(f64::EPSILON);
        let loss = (steer.abs() * abs_speed * handling.drift_loss_gain / damping)
            .min(handling.drift_loss_cap);

        result.traction_loss = loss;
        result.lateral_acceleration =
            state.right() * (-steer.signum() * loss * abs_speed * handling.drift_lateral_gain);
    }

    result
}
