use approx::assert_relative_eq;
use roadracer::{
    components::{InputFlags, VehicleState},
    resources::{RaceEventKind, RoadConfig, RoadState},
    session::RaceSession,
};

use crate::common::{
    assert_on_track, assert_road_consistent, assert_vector_eq, assert_vehicle_valid,
    create_obstacle_alley_config,
    create_straight_config, create_test_config, throttle, TestAppBuilder, TEST_DT,
};

#[test]
fn test_plugin_spawns_vehicle_at_start_pose() {
    let config = create_test_config();
    let mut app = TestAppBuilder::new().with_config(config.clone()).build();

    let vehicle = app.vehicle();
    assert_eq!(vehicle.position, config.physics.start_position);
    assert_eq!(vehicle.speed, 0.0);
    assert_eq!(app.clock().tick, 1);
}

#[test]
fn test_plugin_drives_forward_under_throttle() {
    let mut app = TestAppBuilder::new()
        .with_config(create_straight_config())
        .build();

    app.set_input(throttle());
    app.run_steps(120);

    let vehicle = app.vehicle();
    let config = app.config().clone();
    assert!(vehicle.speed > 0.0);
    assert!(vehicle.position.z > 0.0);
    assert_vehicle_valid(&vehicle, &config.vehicle, &config.physics);
    assert_road_consistent(app.road(), vehicle.position.z);
    assert_on_track(&vehicle, app.road());
}

#[test]
fn test_plugin_matches_session() {
    let config = create_straight_config();
    let mut app = TestAppBuilder::new()
        .with_config(config.clone())
        .with_time_step(TEST_DT)
        .build();
    let mut session = RaceSession::new(config);
    // the warm-up frame has a zero time delta
    session.advance(&InputFlags::default(), 0.0);

    app.set_input(throttle());
    for _ in 0..90 {
        app.run_frame();
        session.advance(&throttle(), TEST_DT);
    }

    let vehicle = app.vehicle();
    // Duration rounds the step to whole nanoseconds
    assert_relative_eq!(vehicle.speed, session.vehicle().speed, epsilon = 1e-4);
    assert_vector_eq(&vehicle.position, &session.vehicle().position, 1e-4);
}

#[test]
fn test_plugin_reports_collisions() {
    let mut app = TestAppBuilder::new()
        .with_config(create_obstacle_alley_config())
        .build();

    if let Some(mut vehicle) = app.query_single_mut::<VehicleState>() {
        vehicle.set_speed(120.0);
    }
    app.set_input(throttle());
    app.run_steps(300);

    assert!(app
        .events()
        .iter()
        .any(|event| event.kind == RaceEventKind::ObstacleHit));
}

#[test]
fn test_plugin_reports_offroad_transitions() {
    let mut app = TestAppBuilder::new()
        .with_config(create_straight_config())
        .build();

    if let Some(mut vehicle) = app.query_single_mut::<VehicleState>() {
        vehicle.position.x = 30.0;
        vehicle.set_speed(60.0);
    }
    app.run_frame();
    if let Some(mut vehicle) = app.query_single_mut::<VehicleState>() {
        vehicle.position.x = 0.0;
    }
    app.run_frame();

    let kinds: Vec<RaceEventKind> = app.events().iter().map(|event| event.kind).collect();
    assert_eq!(
        kinds,
        vec![RaceEventKind::OffRoadEntered, RaceEventKind::OffRoadExited]
    );
}

#[test]
fn test_plugin_updates_chassis_pose() {
    let mut app = TestAppBuilder::new()
        .with_config(create_straight_config())
        .build();

    app.set_input(InputFlags {
        accelerate: true,
        turn_left: true,
        ..Default::default()
    });
    app.run_steps(30);

    let pose = app.pose();
    let vehicle = app.vehicle();
    assert_eq!(pose.wheel_steer, vehicle.steering_angle);
    assert!(pose.wheel_steer < 0.0);
}

#[test]
fn test_plugin_road_resource_is_shared() {
    let mut app = TestAppBuilder::new().with_config(create_test_config()).build();
    app.set_input(throttle());
    app.run_steps(600);

    let z = app.vehicle().position.z;
    let cap = app.config().spawn.obstacles.max_alive;
    let road: &RoadState = app.road();
    assert!(road.max_extent - z >= 0.0);
    assert!(road.obstacles.len() <= cap);
}

#[test]
fn test_plugin_replaces_invalid_config_with_defaults() {
    let mut config = create_test_config();
    config.road.segment_length = 0.0;

    let mut app = TestAppBuilder::new().with_config(config.clone()).build();
    app.run_steps(30);

    assert_eq!(app.config().road, RoadConfig::default());
    assert_eq!(app.config().seed, config.seed);
    let vehicle_z = app.vehicle().position.z;
    assert!(!app.road().segments.is_empty());
    assert_road_consistent(app.road(), vehicle_z);
}
