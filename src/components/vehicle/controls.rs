use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw per-frame input snapshot written by the host.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFlags {
    pub accelerate: bool,
    pub brake: bool,
    pub reverse: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl InputFlags {
    pub fn accelerating() -> Self {
        Self {
            accelerate: true,
            ..Default::default()
        }
    }

    /// Which way the player is asking to steer: -1 left, 1 right, 0 neither
    /// (or both).
    pub fn steer_direction(&self) -> f64 {
        match (self.turn_left, self.turn_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    pub fn is_steering(&self) -> bool {
        self.steer_direction() != 0.0
    }
}

/// Control levels after arbitration, each 0 or 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub throttle: f64,
    pub brake: f64,
    pub reverse: f64,
}

impl ControlState {
    /// Brake strictly overrides throttle; reverse is passed through and
    /// arbitrated against brake by the force model.
    pub fn resolve(input: &InputFlags) -> Self {
        Self {
            throttle: if input.accelerate && !input.brake { 1.0 } else { 0.0 },
            brake: if input.brake { 1.0 } else { 0.0 },
            reverse: if input.reverse { 1.0 } else { 0.0 },
        }
    }

    pub fn throttle_active(&self) -> bool {
        self.throttle > 0.0
    }

    pub fn brake_active(&self) -> bool {
        self.brake > 0.0
    }

    pub fn reverse_active(&self) -> bool {
        self.reverse > 0.0
    }
}
