use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{Collectible, HeadingFrame, Obstacle};

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vector3<f64>,
    pub max: Vector3<f64>,
}

impl BoundingBox {
    pub fn from_center(center: Vector3<f64>, half_extents: Vector3<f64>) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// World AABB enclosing a box with the given half extents laid along the
    /// frame's right/up/direction axes.
    pub fn oriented(
        center: Vector3<f64>,
        frame: &HeadingFrame,
        half_extents: Vector3<f64>,
    ) -> Self {
        let extent = frame.right.abs() * half_extents.x.abs()
            + frame.up.abs() * half_extents.y.abs()
            + frame.direction.abs() * half_extents.z.abs();
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    pub fn center(&self) -> Vector3<f64> {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vector3<f64> {
        (self.max - self.min) * 0.5
    }

    /// Closed-interval overlap on all three axes.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

/// Opaque hints for rendering and audio after an obstacle hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTag {
    CameraShake,
    ImpactSparks,
    ImpactSound,
}

impl EffectTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectTag::CameraShake => "camera_shake",
            EffectTag::ImpactSparks => "impact_sparks",
            EffectTag::ImpactSound => "impact_sound",
        }
    }
}

/// Outcome of [`collide_with_obstacle`](crate::systems::collide_with_obstacle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionResponse {
    /// How much |speed| was removed.
    pub speed_reduction: f64,
    pub effects: Vec<EffectTag>,
}

/// Entities hit during one collision pass. Hits have already been removed
/// from the road state.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionReport {
    pub hit_obstacles: Vec<Obstacle>,
    pub hit_collectibles: Vec<Collectible>,
}

impl CollisionReport {
    pub fn is_empty(&self) -> bool {
        self.hit_obstacles.is_empty() && self.hit_collectibles.is_empty()
    }
}
