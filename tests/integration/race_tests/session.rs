use roadracer::{
    components::{EffectTag, InputFlags},
    resources::RaceEventKind,
    session::RaceSession,
};

use crate::common::{
    assert_road_consistent, assert_vehicle_valid, create_obstacle_alley_config,
    create_test_config, scripted_inputs, throttle, TEST_DT,
};

#[test]
fn test_obstacle_hit_slows_the_car() {
    let config = create_obstacle_alley_config();
    let mut session = RaceSession::new(config.clone());
    session.vehicle_mut().set_speed(120.0);

    let mut hit = None;
    for _ in 0..600 {
        let before = session.vehicle().speed.abs();
        let report = session.advance(&throttle(), TEST_DT);
        if let Some(response) = report.collision_response {
            hit = Some((before, response, report.events));
            break;
        }
    }

    let Some((before, response, events)) = hit else {
        panic!("the car never reached an obstacle");
    };
    assert!(response.speed_reduction > 0.0);
    assert!(response.speed_reduction <= 60.0);
    assert!(session.vehicle().speed.abs() < before);
    assert_eq!(session.vehicle().velocity.y, 4.0);
    assert_eq!(
        response.effects,
        vec![EffectTag::CameraShake, EffectTag::ImpactSparks, EffectTag::ImpactSound]
    );
    assert!(events.iter().any(|event| event.kind == RaceEventKind::ObstacleHit));
}

#[test]
fn test_collected_entities_leave_the_road() {
    let config = create_obstacle_alley_config();
    let mut session = RaceSession::new(config);
    session.vehicle_mut().set_speed(100.0);

    for _ in 0..600 {
        let report = session.advance(&throttle(), TEST_DT);
        for obstacle in &report.collisions.hit_obstacles {
            assert!(session.road().obstacles.iter().all(|o| o.id != obstacle.id));
        }
    }
}

#[test]
fn test_same_seed_same_race() {
    let config = create_test_config();
    let inputs = scripted_inputs(1800, 60);

    let run = || {
        let mut session = RaceSession::new(config.clone());
        let mut tags = Vec::new();
        for input in &inputs {
            let report = session.advance(input, TEST_DT);
            tags.extend(report.events.iter().map(|event| event.tag()));
        }
        (session.vehicle().clone(), session.road().obstacles.clone(), tags)
    };

    pretty_assertions::assert_eq!(run(), run());
}

#[test]
fn test_full_race_keeps_invariants() {
    let config = create_test_config();
    let mut session = RaceSession::new(config.clone());

    for input in scripted_inputs(7200, 120) {
        session.advance(&input, TEST_DT);
        assert_vehicle_valid(session.vehicle(), &config.vehicle, &config.physics);
        assert_road_consistent(session.road(), session.vehicle().position.z);
    }
}

#[test]
fn test_turn_ahead_announced_on_default_track() {
    let config = create_test_config();
    let mut session = RaceSession::new(config.clone());

    let mut turn_values = Vec::new();
    // cover a whole repeat period at a steady clip
    for _ in 0..3000 {
        session.vehicle_mut().position.x = session.road().curvature_at(session.vehicle().position.z);
        let report = session.advance(&throttle(), TEST_DT);
        turn_values.extend(
            report
                .events
                .iter()
                .filter(|event| event.kind == RaceEventKind::TurnAhead)
                .filter_map(|event| event.value),
        );
    }

    assert!(!turn_values.is_empty());
    assert!(turn_values
        .iter()
        .all(|value| value.abs() > config.road.turn_notify_threshold));
}

#[test]
fn test_world_state_reports_lookahead() {
    let config = create_test_config();
    let mut session = RaceSession::new(config.clone());
    session.advance(&InputFlags::default(), TEST_DT);

    let z = session.vehicle().position.z;
    let world = session.world_state();
    assert_eq!(world.curvature, session.current_curvature());
    assert_eq!(
        world.target_curvature,
        config.road.track.turn_intensity(z + config.road.turn_lookahead)
    );
    assert_eq!(world.segments.len(), config.road.segment_count);
}
