use crate::components::{HandlingConfig, InputFlags, VehicleConfig, VehicleState};
use crate::utils::approach;

/// Move the steering angle toward the held extreme at `steering_rate`, or
/// back toward zero at the faster `steering_return_rate`. The return snaps to
/// exactly zero once within one frame-step so it cannot oscillate.
///
/// With no turn held while off-road the wheel is left alone; the surface
/// stage eases it toward the recovery bias instead.
pub fn update_steering(
    state: &mut VehicleState,
    config: &VehicleConfig,
    input: &InputFlags,
    dt: f64,
) {
    let max = config.max_steering_angle.abs();
    let held = input.steer_direction();

    let angle = if held != 0.0 {
        approach(state.steering_angle, held * max, config.steering_rate * dt)
    } else if state.is_off_road {
        state.steering_angle
    } else {
        approach(state.steering_angle, 0.0, config.steering_return_rate * dt)
    };
    state.steering_angle = angle.clamp(-max, max);
}

/// Fraction of the steering angle that still turns the car at the given
/// speed: 1 at rest, falling as a power law of the speed ratio to the floor
/// at max speed.
pub fn steering_effectiveness(
    speed: f64,
    config: &VehicleConfig,
    handling: &HandlingConfig,
) -> f64 {
    let floor = handling.steering_floor.clamp(0.0, 1.0);
    if config.max_speed <= 0.0 {
        return 1.0;
    }
    let ratio = (speed.abs() / config.max_speed).clamp(0.0, 1.0);
    (1.0 - (1.0 - floor) * ratio.powf(handling.steering_power)).max(floor)
}

pub fn effective_steering(
    state: &VehicleState,
    config: &VehicleConfig,
    handling: &HandlingConfig,
) -> f64 {
    state.steering_angle * steering_effectiveness(state.speed, config, handling)
}
