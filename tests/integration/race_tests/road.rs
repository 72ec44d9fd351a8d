use approx::assert_relative_eq;
use roadracer::{
    components::TrackDefinition,
    resources::{RoadConfig, RoadState},
    systems::{maintain_road, RoadQuery},
};

use crate::common::assert_road_consistent;

#[test]
fn test_curvature_is_periodic() {
    let track = TrackDefinition::default();
    for i in 0..500 {
        let z = i as f64 * 37.3 - 4000.0;
        assert_relative_eq!(
            track.curvature_at(z),
            track.curvature_at(z + track.repeat_length),
            epsilon = 1e-9
        );
    }
}

#[test]
fn test_curvature_matches_at_repeat_boundary() {
    let track = TrackDefinition::default();
    let epsilon = 1e-7;

    assert_relative_eq!(
        track.curvature_at(track.repeat_length - epsilon),
        track.curvature_at(-epsilon),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        track.curvature_at(track.repeat_length),
        track.curvature_at(0.0),
        epsilon = 1e-9
    );
}

#[test]
fn test_curvature_is_continuous_at_control_points() {
    let track = TrackDefinition::default();
    let h = 1e-6;
    for point in &track.control_points {
        let z = point.position * track.repeat_length;
        let left = track.curvature_at(z - h);
        let right = track.curvature_at(z + h);
        assert_relative_eq!(left, right, epsilon = 1e-6);
        assert_relative_eq!(
            track.curvature_at(z),
            point.intensity * track.lateral_scale,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_road_keeps_pace_with_any_bounded_speed() {
    for speed in [10.0, 60.0, 120.0, 200.0] {
        for dt in [1.0 / 144.0, 1.0 / 60.0, 0.1] {
            let mut road = RoadState::new(RoadConfig::default());
            let mut z = 0.0;
            for tick in 0..4000 {
                z += speed * dt;
                maintain_road(&mut road, z, tick);
                assert_road_consistent(&road, z);
            }
        }
    }
}

#[test]
fn test_nearest_segment_agrees_with_curvature() {
    let mut road = RoadState::new(RoadConfig::default());
    let mut z = 0.0;
    for tick in 0..2000 {
        z += 2.0;
        maintain_road(&mut road, z, tick);
    }

    let nearest = road.nearest_segment_offset(z);
    let Some(offset) = nearest else {
        panic!("no segment near the vehicle at z={z}");
    };
    let segment = road
        .segments
        .iter()
        .min_by(|a, b| (a.z - z).abs().total_cmp(&(b.z - z).abs()))
        .copied();
    assert_eq!(segment.map(|s| s.x), Some(offset));
    assert_eq!(offset, road.curvature_at(segment.map(|s| s.z).unwrap_or_default()));
}

#[test]
fn test_live_segments_stay_evenly_spaced() {
    let mut road = RoadState::new(RoadConfig::default());
    let mut z = 0.0;
    for tick in 0..3000 {
        z += 3.3;
        maintain_road(&mut road, z, tick);
    }

    let cutoff = z - road.config.trailing_distance;
    let mut positions: Vec<f64> = road
        .segments
        .iter()
        .map(|s| s.z)
        .filter(|segment_z| *segment_z >= cutoff)
        .collect();
    positions.sort_by(f64::total_cmp);
    for pair in positions.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], road.config.segment_length, epsilon = 1e-6);
    }
}
