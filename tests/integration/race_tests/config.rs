use pretty_assertions::assert_eq;
use roadracer::{
    components::{ControlPoint, TrackDefinition},
    resources::{SimulationConfig, SimulationConfigBuilder},
    session::RaceSession,
    utils::ConfigError,
};
use serde_json::json;
use tempfile::tempdir;

use crate::common::{create_test_config, throttle, TEST_DT};

#[test]
fn test_yaml_round_trip_drives_identically() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("race.yaml");

    let mut config = create_test_config();
    config.vehicle.max_speed = 150.0;
    config.handling.recovery_bias = 0.25;
    config.save(&path)?;
    let loaded = SimulationConfig::load(&path)?;
    assert_eq!(loaded, config);

    let mut original = RaceSession::new(config);
    let mut reloaded = RaceSession::new(loaded);
    for _ in 0..240 {
        original.advance(&throttle(), TEST_DT);
        reloaded.advance(&throttle(), TEST_DT);
    }
    assert_eq!(original.vehicle(), reloaded.vehicle());
    Ok(())
}

#[test]
fn test_json_overrides_only_named_keys() -> Result<(), ConfigError> {
    let config = SimulationConfig::from_json(&json!({
        "vehicle": { "max_speed": 180.0 },
        "road": { "segment_count": 80 },
        "seed": 9
    }))?;

    let defaults = SimulationConfig::default();
    assert_eq!(config.vehicle.max_speed, 180.0);
    assert_eq!(config.vehicle.mass, defaults.vehicle.mass);
    assert_eq!(config.road.segment_count, 80);
    assert_eq!(config.road.track, defaults.road.track);
    assert_eq!(config.seed, Some(9));
    Ok(())
}

#[test]
fn test_builder_rejects_malformed_track() {
    let mut road = SimulationConfig::default().road;
    road.track = TrackDefinition {
        control_points: vec![ControlPoint::new(0.0, 0.0), ControlPoint::new(0.5, 2.0), ControlPoint::new(1.0, 0.0)],
        ..TrackDefinition::default()
    };

    let result = SimulationConfigBuilder::new().road(road).build();

    assert!(matches!(result, Err(ConfigError::InvalidTrack(_))));
}

#[test]
fn test_loading_garbage_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "vehicle: [this is not a map")?;

    assert!(matches!(SimulationConfig::load(&path), Err(ConfigError::Yaml(_))));
    Ok(())
}

#[test]
fn test_session_replaces_invalid_config_with_defaults() {
    let mut config = create_test_config();
    config.road.segment_length = 0.0;

    let mut session = RaceSession::new(config);
    let report = session.advance(&throttle(), TEST_DT);

    assert_eq!(
        session.config().road,
        SimulationConfig::default().road
    );
    assert_eq!(session.config().seed, create_test_config().seed);
    assert!(!report.maintenance.emergency);
}
