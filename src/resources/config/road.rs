use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::TrackDefinition;
use crate::resources::MaintenanceSchedule;
use crate::utils::DEFAULT_ROAD_HALF_WIDTH;

/// Road geometry, recycling and turn-notification parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadConfig {
    pub lane_width: f64,
    /// Off-road beyond this lateral distance from the segment centre [u]
    pub road_half_width: f64,
    /// Band around x = 0 used when no segment data is available [u]
    pub fallback_half_width: f64,
    pub segment_length: f64,
    pub segment_count: usize,
    /// Segments further than this behind the vehicle are recycled [u]
    pub trailing_distance: f64,
    /// Recycling is forced when less road than this remains ahead [u]
    pub emergency_margin: f64,
    /// Max longitudinal gap for a segment to count as "nearest" [u]
    pub segment_search_window: f64,
    pub turn_lookahead: f64,
    pub turn_notify_threshold: f64,
    pub maintenance: MaintenanceSchedule,
    pub track: TrackDefinition,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            lane_width: 4.0,
            road_half_width: DEFAULT_ROAD_HALF_WIDTH,
            fallback_half_width: DEFAULT_ROAD_HALF_WIDTH,
            segment_length: 20.0,
            segment_count: 60,
            trailing_distance: 100.0,
            emergency_margin: 300.0,
            segment_search_window: 40.0,
            turn_lookahead: 250.0,
            turn_notify_threshold: 0.5,
            maintenance: MaintenanceSchedule::default(),
            track: TrackDefinition::default(),
        }
    }
}

impl RoadConfig {
    /// Length of road the segment pool covers at once.
    pub fn pool_length(&self) -> f64 {
        self.segment_length * self.segment_count as f64
    }
}

/// Cadence, cap and placement window for one kind of roadside entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpawnConfig {
    /// Seconds between spawn attempts
    pub interval: f64,
    pub max_alive: usize,
    pub min_ahead: f64,
    pub max_ahead: f64,
    pub height: f64,
    pub half_extents: Vector3<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub obstacles: EntitySpawnConfig,
    pub collectibles: EntitySpawnConfig,
    /// New obstacles keep at least this far from recent placements [u]
    pub obstacle_min_spacing: f64,
    /// How many recent obstacle placements the spacing rule remembers
    pub obstacle_spacing_memory: usize,
    /// Entities further than this behind the vehicle are removed [u]
    pub despawn_distance: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            obstacles: EntitySpawnConfig {
                interval: 1.2,
                max_alive: 12,
                min_ahead: 400.0,
                max_ahead: 800.0,
                height: 1.0,
                half_extents: Vector3::new(1.5, 1.0, 1.0),
            },
            collectibles: EntitySpawnConfig {
                interval: 0.5,
                max_alive: 20,
                min_ahead: 300.0,
                max_ahead: 700.0,
                height: 1.0,
                half_extents: Vector3::new(0.75, 0.75, 0.75),
            },
            obstacle_min_spacing: 60.0,
            obstacle_spacing_memory: 6,
            despawn_distance: 50.0,
        }
    }
}
