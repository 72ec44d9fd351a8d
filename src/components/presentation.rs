use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Cosmetic chassis pose derived from a finished physics frame.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChassisPose {
    /// Body roll [rad], positive leans toward +X
    pub roll: f64,
    /// Body pitch [rad], positive noses up
    pub pitch: f64,
    /// Vertical body offset from average suspension load [u]
    pub bounce: f64,
    /// Front wheel visual steer [rad]
    pub wheel_steer: f64,
}
