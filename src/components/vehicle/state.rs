use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{ControlState, HeadingFrame, VehicleConfig};
use crate::resources::PhysicsConfig;
use crate::utils::WHEEL_COUNT;

/// One suspension corner. Derived each frame; cosmetic apart from feeding the
/// grounded flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    /// Offset in the vehicle frame.
    pub local_offset: Vector3<f64>,
    /// World-space contact point.
    pub contact_point: Vector3<f64>,
    /// Penetration below rest height, 0 when unloaded.
    pub compression: f64,
    pub on_ground: bool,
}

/// Complete mutable state of the single player vehicle.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// World position [u]
    pub position: Vector3<f64>,
    /// World velocity [u/s], forward part plus retained lateral slip
    pub velocity: Vector3<f64>,
    pub frame: HeadingFrame,
    /// Rotation about +Y [rad]
    pub yaw: f64,
    /// Yaw rate [rad/s]
    pub angular_velocity: f64,
    /// Signed forward speed [u/s], negative in reverse
    pub speed: f64,
    pub steering_angle: f64,
    pub controls: ControlState,
    pub is_grounded: bool,
    pub is_off_road: bool,
    pub was_off_road: bool,
    pub wheels: [Wheel; WHEEL_COUNT],
}

impl VehicleState {
    /// Fixed start pose: at the physics start position, facing +Z, at rest.
    pub fn new(vehicle: &VehicleConfig, physics: &PhysicsConfig) -> Self {
        let frame = HeadingFrame::from_yaw(physics.start_yaw);
        let wheels = vehicle.wheel_offsets.map(|offset| Wheel {
            local_offset: offset,
            contact_point: physics.start_position + frame.to_world(&offset),
            compression: 0.0,
            on_ground: true,
        });

        Self {
            position: physics.start_position,
            velocity: Vector3::zeros(),
            frame,
            yaw: physics.start_yaw,
            angular_velocity: 0.0,
            speed: 0.0,
            steering_angle: 0.0,
            controls: ControlState::default(),
            is_grounded: true,
            is_off_road: false,
            was_off_road: false,
            wheels,
        }
    }

    pub fn reset(&mut self, vehicle: &VehicleConfig, physics: &PhysicsConfig) {
        *self = Self::new(vehicle, physics);
    }

    pub fn direction(&self) -> Vector3<f64> {
        self.frame.direction
    }

    pub fn right(&self) -> Vector3<f64> {
        self.frame.right
    }

    pub fn up(&self) -> Vector3<f64> {
        self.frame.up
    }

    /// Distance travelled along the road axis.
    pub fn longitudinal_position(&self) -> f64 {
        self.position.z
    }

    pub fn speed_ratio(&self, max_speed: f64) -> f64 {
        crate::utils::safe_ratio(self.speed, max_speed, 0.0)
    }

    /// Replace the signed forward speed, rebuilding the forward part of
    /// `velocity` while keeping lateral slip and vertical motion.
    pub fn set_speed(&mut self, speed: f64) {
        let direction = self.frame.direction;
        let forward = self.velocity.dot(&direction);
        self.velocity += direction * (speed - forward);
        self.speed = speed;
    }

    pub fn wheel_compressions(&self) -> [f64; WHEEL_COUNT] {
        self.wheels.map(|wheel| wheel.compression)
    }
}
