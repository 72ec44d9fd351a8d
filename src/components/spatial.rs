use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Orthonormal vehicle frame derived from a single yaw angle.
///
/// Yaw 0 faces +Z; positive yaw turns toward +X, which is the vehicle's right.
/// There is no authoritative roll or pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeadingFrame {
    pub direction: Vector3<f64>,
    pub right: Vector3<f64>,
    pub up: Vector3<f64>,
}

impl Default for HeadingFrame {
    fn default() -> Self {
        Self::from_yaw(0.0)
    }
}

impl HeadingFrame {
    /// Rotate the canonical basis by `yaw` about +Y and renormalise.
    pub fn from_yaw(yaw: f64) -> Self {
        let (sin, cos) = yaw.sin_cos();
        let direction = Vector3::new(sin, 0.0, cos);
        let right = Vector3::new(cos, 0.0, -sin);
        Self {
            direction: direction.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::z),
            right: right.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::x),
            up: Vector3::y(),
        }
    }

    /// Transform a vehicle-frame offset (x right, y up, z forward) to world.
    pub fn to_world(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.right * local.x + self.up * local.y + self.direction * local.z
    }
}
