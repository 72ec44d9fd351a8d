use crate::components::TrackDefinition;
use crate::resources::RoadState;
use crate::utils::DEFAULT_ROAD_HALF_WIDTH;

/// Read-only view of the road used by the vehicle's surface stage and by
/// camera-framing collaborators.
pub trait RoadQuery {
    /// Lateral offset of the road centre at longitudinal position `z`.
    fn curvature_at(&self, z: f64) -> f64;

    /// Lateral offset of the closest known segment to `z`, if any is close
    /// enough to trust.
    fn nearest_segment_offset(&self, z: f64) -> Option<f64>;

    fn half_width(&self) -> f64 {
        DEFAULT_ROAD_HALF_WIDTH
    }

    /// Band around x = 0 used when no segment answers.
    fn fallback_half_width(&self) -> f64 {
        self.half_width()
    }
}

impl RoadQuery for RoadState {
    fn curvature_at(&self, z: f64) -> f64 {
        RoadState::curvature_at(self, z)
    }

    /// Closest segment by longitudinal distance, within the search window.
    fn nearest_segment_offset(&self, z: f64) -> Option<f64> {
        if !z.is_finite() {
            return None;
        }
        let window = self.config.segment_search_window;
        self.segments
            .iter()
            .map(|segment| ((segment.z - z).abs(), segment.x))
            .filter(|(gap, _)| *gap <= window)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, x)| x)
    }

    fn half_width(&self) -> f64 {
        self.config.road_half_width
    }

    fn fallback_half_width(&self) -> f64 {
        self.config.fallback_half_width
    }
}

/// A bare track has no segment pool; callers always take the fallback band.
impl RoadQuery for TrackDefinition {
    fn curvature_at(&self, z: f64) -> f64 {
        TrackDefinition::curvature_at(self, z)
    }

    fn nearest_segment_offset(&self, _z: f64) -> Option<f64> {
        None
    }
}
