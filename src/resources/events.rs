use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceEventKind {
    OffRoadEntered,
    OffRoadExited,
    TurnAhead,
    ObstacleHit,
    CollectibleCollected,
}

/// Named in-frame notification for audio/UI collaborators: a tag plus an
/// optional scalar.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceEvent {
    pub kind: RaceEventKind,
    pub value: Option<f64>,
}

impl RaceEvent {
    pub fn new(kind: RaceEventKind) -> Self {
        Self { kind, value: None }
    }

    pub fn with_value(kind: RaceEventKind, value: f64) -> Self {
        Self {
            kind,
            value: Some(value),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self.kind {
            RaceEventKind::OffRoadEntered => "off_road_entered",
            RaceEventKind::OffRoadExited => "off_road_exited",
            RaceEventKind::TurnAhead => "turn_ahead",
            RaceEventKind::ObstacleHit => "obstacle_hit",
            RaceEventKind::CollectibleCollected => "collectible_collected",
        }
    }
}
