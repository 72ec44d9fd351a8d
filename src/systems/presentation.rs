use bevy::prelude::*;

use crate::components::{ChassisPose, VehicleConfig, VehicleState};
use crate::resources::SimulationConfig;

const MAX_TILT: f64 = 0.15; // rad
const CORNER_LEAN_GAIN: f64 = 0.002;
const THROTTLE_SQUAT: f64 = 0.02;
const BRAKE_DIVE: f64 = 0.03;

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Cosmetic tilt and bounce read off a finished frame. Never fed back into
/// the physics.
pub fn chassis_pose(state: &VehicleState, config: &VehicleConfig) -> ChassisPose {
    let side = |left: bool| {
        mean(state
            .wheels
            .iter()
            .filter(move |w| (w.local_offset.x < 0.0) == left)
            .map(|w| w.compression))
    };
    let end = |front: bool| {
        mean(state
            .wheels
            .iter()
            .filter(move |w| (w.local_offset.z > 0.0) == front)
            .map(|w| w.compression))
    };

    let track_width = mean(state.wheels.iter().map(|w| w.local_offset.x.abs())) * 2.0;
    let load_roll = if track_width > 0.0 {
        (side(true) - side(false)).atan2(track_width)
    } else {
        0.0
    };
    let corner_lean = -state.angular_velocity * state.speed * CORNER_LEAN_GAIN;

    let load_pitch = if config.wheelbase > 0.0 {
        (end(false) - end(true)).atan2(config.wheelbase)
    } else {
        0.0
    };
    let weight_transfer =
        state.controls.throttle * THROTTLE_SQUAT - state.controls.brake * BRAKE_DIVE;

    let travel = config.suspension_travel.abs();
    let average_compression = mean(state.wheels.iter().map(|w| w.compression));

    ChassisPose {
        roll: (load_roll + corner_lean).clamp(-MAX_TILT, MAX_TILT),
        pitch: (load_pitch + weight_transfer).clamp(-MAX_TILT, MAX_TILT),
        bounce: (travel * 0.5 - average_compression).clamp(-travel, travel),
        wheel_steer: state.steering_angle,
    }
}

pub fn chassis_pose_system(
    mut query: Query<(&VehicleState, &mut ChassisPose)>,
    config: Res<SimulationConfig>,
) {
    for (state, mut pose) in query.iter_mut() {
        *pose = chassis_pose(state, &config.vehicle);
    }
}
