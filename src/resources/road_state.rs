use bevy::prelude::*;
use std::collections::VecDeque;

use crate::components::{Collectible, Obstacle, RoadSegment};
use crate::resources::RoadConfig;

/// Snapshot for the surface stage and camera-framing collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldState<'a> {
    /// Turn intensity at the vehicle
    pub curvature: f64,
    /// Turn intensity one lookahead distance further on
    pub target_curvature: f64,
    pub segments: &'a [RoadSegment],
}

/// The recycled segment pool plus the transient roadside entities.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RoadState {
    pub config: RoadConfig,
    pub segments: Vec<RoadSegment>,
    /// Furthest segment position known to the recycler
    pub max_extent: f64,
    pub min_extent: f64,
    pub obstacles: Vec<Obstacle>,
    pub collectibles: Vec<Collectible>,
    pub obstacle_cooldown: f64,
    pub collectible_cooldown: f64,
    /// Longitudinal positions of the most recent obstacle placements
    pub recent_obstacle_z: VecDeque<f64>,
    pub next_entity_id: u64,
    /// Whether a turn-ahead notification is currently latched
    pub turn_ahead_active: bool,
}

impl RoadState {
    pub fn new(config: RoadConfig) -> Self {
        let mut state = Self {
            config,
            segments: Vec::new(),
            max_extent: 0.0,
            min_extent: 0.0,
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            obstacle_cooldown: 0.0,
            collectible_cooldown: 0.0,
            recent_obstacle_z: VecDeque::new(),
            next_entity_id: 0,
            turn_ahead_active: false,
        };
        state.reset();
        state
    }

    /// Rebuild the pool contiguously from `-trailing_distance` and drop all
    /// entities.
    pub fn reset(&mut self) {
        let start = -self.config.trailing_distance;
        let length = self.config.segment_length;
        let track = &self.config.track;

        self.segments = (0..self.config.segment_count)
            .map(|i| {
                let z = start + i as f64 * length;
                RoadSegment {
                    z,
                    x: track.curvature_at(z),
                }
            })
            .collect();
        self.refresh_extents();

        self.obstacles.clear();
        self.collectibles.clear();
        self.obstacle_cooldown = 0.0;
        self.collectible_cooldown = 0.0;
        self.recent_obstacle_z.clear();
        self.next_entity_id = 0;
        self.turn_ahead_active = false;
    }

    /// Exhaustive recomputation of the tracked extents. Empty pools keep
    /// their previous bounds.
    pub fn refresh_extents(&mut self) {
        if self.segments.is_empty() {
            return;
        }
        let (min, max) = self
            .segments
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), segment| {
                (min.min(segment.z), max.max(segment.z))
            });
        self.min_extent = min;
        self.max_extent = max;
    }

    pub fn curvature_at(&self, z: f64) -> f64 {
        self.config.track.curvature_at(z)
    }

    pub fn turn_intensity(&self, z: f64) -> f64 {
        self.config.track.turn_intensity(z)
    }

    /// Road still generated ahead of `vehicle_z`.
    pub fn remaining_ahead(&self, vehicle_z: f64) -> f64 {
        self.max_extent - vehicle_z
    }

    pub fn world_state(&self, vehicle_z: f64) -> WorldState<'_> {
        WorldState {
            curvature: self.turn_intensity(vehicle_z),
            target_curvature: self.turn_intensity(vehicle_z + self.config.turn_lookahead),
            segments: &self.segments,
        }
    }

    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_entity_id;
        self.next_entity_id += 1;
        id
    }
}

impl Default for RoadState {
    fn default() -> Self {
        Self::new(RoadConfig::default())
    }
}
