use serde::{Deserialize, Serialize};

use crate::utils::{errors::ConfigError, lerp, safe_ratio, smoothstep, wrap_unit};

/// A (cycle position, turn intensity) pair of the repeating track shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Normalised position within one repeat period, in [0, 1].
    pub position: f64,
    /// Turn intensity in [-1, 1]; positive bends the road toward +X.
    pub intensity: f64,
}

impl ControlPoint {
    pub const fn new(position: f64, intensity: f64) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// The repeating road shape and the pure curvature function built on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackDefinition {
    pub control_points: Vec<ControlPoint>,
    /// Road length covered by one cycle of control points [u].
    pub repeat_length: f64,
    /// Lateral offset at intensity 1 (lane width × a fixed constant) [u].
    pub lateral_scale: f64,
}

impl Default for TrackDefinition {
    fn default() -> Self {
        Self {
            control_points: vec![
                ControlPoint::new(0.0, 0.0),
                ControlPoint::new(0.08, 0.0),
                ControlPoint::new(0.15, 0.6),
                ControlPoint::new(0.25, 0.6),
                ControlPoint::new(0.32, 0.0),
                ControlPoint::new(0.40, -0.8),
                ControlPoint::new(0.50, -0.8),
                ControlPoint::new(0.58, 0.0),
                ControlPoint::new(0.66, 0.3),
                ControlPoint::new(0.72, 1.0),
                ControlPoint::new(0.80, -0.4),
                ControlPoint::new(0.90, 0.0),
                ControlPoint::new(1.0, 0.0),
            ],
            repeat_length: 6000.0,
            lateral_scale: 4.0 * 6.0,
        }
    }
}

impl TrackDefinition {
    /// A dead straight track, handy for isolating vehicle behaviour.
    pub fn straight(repeat_length: f64, lateral_scale: f64) -> Self {
        Self {
            control_points: vec![ControlPoint::new(0.0, 0.0), ControlPoint::new(1.0, 0.0)],
            repeat_length,
            lateral_scale,
        }
    }

    /// Eased turn intensity at longitudinal position `z`.
    ///
    /// `z` is reduced modulo the repeat length, the bracketing control
    /// points are found and their intensities are interpolated with a
    /// smoothstep-reshaped fraction, so the value is continuous across
    /// control points and across the repeat boundary.
    pub fn turn_intensity(&self, z: f64) -> f64 {
        let points = &self.control_points;
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };

        let t = wrap_unit(z, self.repeat_length);

        // First control point strictly after t
        let upper = points.partition_point(|point| point.position <= t);
        if upper == 0 {
            return first.intensity;
        }
        if upper >= points.len() {
            return last.intensity;
        }

        let a = points[upper - 1];
        let b = points[upper];
        let fraction = safe_ratio(t - a.position, b.position - a.position, 0.0);
        lerp(a.intensity, b.intensity, smoothstep(fraction))
    }

    /// Lateral offset of the road centre at `z`.
    pub fn curvature_at(&self, z: f64) -> f64 {
        self.turn_intensity(z) * self.lateral_scale
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.repeat_length.is_finite() && self.repeat_length > 0.0) {
            return Err(ConfigError::invalid("track.repeat_length", self.repeat_length));
        }
        if !self.lateral_scale.is_finite() {
            return Err(ConfigError::invalid("track.lateral_scale", self.lateral_scale));
        }

        let points = &self.control_points;
        if points.len() < 2 {
            return Err(ConfigError::InvalidTrack(format!(
                "need at least 2 control points, got {}",
                points.len()
            )));
        }
        if points[0].position != 0.0 {
            return Err(ConfigError::InvalidTrack(format!(
                "first control point must sit at 0, got {}",
                points[0].position
            )));
        }
        let last = points[points.len() - 1];
        if last.position != 1.0 {
            return Err(ConfigError::InvalidTrack(format!(
                "last control point must sit at 1, got {}",
                last.position
            )));
        }
        if (last.intensity - points[0].intensity).abs() > 1e-9 {
            return Err(ConfigError::InvalidTrack(
                "first and last intensities differ, the road would jump at the repeat boundary"
                    .to_string(),
            ));
        }
        for pair in points.windows(2) {
            if pair[1].position < pair[0].position {
                return Err(ConfigError::InvalidTrack(format!(
                    "control points out of order at {}",
                    pair[1].position
                )));
            }
        }
        if let Some(point) = points
            .iter()
            .find(|point| !(-1.0..=1.0).contains(&point.intensity))
        {
            return Err(ConfigError::InvalidTrack(format!(
                "intensity {} outside [-1, 1]",
                point.intensity
            )));
        }
        Ok(())
    }
}
