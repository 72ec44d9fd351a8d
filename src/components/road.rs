use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::BoundingBox;

/// One of the three driving lanes, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Center,
    Right,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Left, Lane::Center, Lane::Right];

    pub fn index(&self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Center => 1,
            Lane::Right => 2,
        }
    }

    /// Out-of-range indices fall back to the centre lane.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Lane::Left,
            2 => Lane::Right,
            _ => Lane::Center,
        }
    }

    /// Lateral offset of the lane centre from the road centre.
    pub fn bias(&self, lane_width: f64) -> f64 {
        (self.index() as f64 - 1.0) * lane_width
    }
}

/// A pooled slice of road: longitudinal position and the lateral offset of
/// the road centre there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub z: f64,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u64,
    pub position: Vector3<f64>,
    pub lane: Lane,
    pub half_extents: Vector3<f64>,
}

impl Obstacle {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center(self.position, self.half_extents)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u64,
    pub position: Vector3<f64>,
    pub lane: Lane,
    pub half_extents: Vector3<f64>,
}

impl Collectible {
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_center(self.position, self.half_extents)
    }
}
