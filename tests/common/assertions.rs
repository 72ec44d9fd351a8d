use approx::assert_relative_eq;
use nalgebra::Vector3;
use roadracer::{
    components::{VehicleConfig, VehicleState},
    resources::{PhysicsConfig, RoadState},
};

/// Assert that a vehicle state is finite and inside its invariants
#[track_caller]
pub fn assert_vehicle_valid(state: &VehicleState, vehicle: &VehicleConfig, physics: &PhysicsConfig) {
    assert!(
        state.position.iter().all(|v| v.is_finite()),
        "Position is not finite: {:?}",
        state.position
    );
    assert!(
        state.velocity.iter().all(|v| v.is_finite()),
        "Velocity is not finite: {:?}",
        state.velocity
    );
    assert!(state.yaw.is_finite(), "Yaw is not finite");
    assert!(state.angular_velocity.is_finite(), "Angular velocity is not finite");

    assert!(
        state.position.y >= physics.min_ground_clearance,
        "Vehicle sank to y={}",
        state.position.y
    );
    assert!(
        state.speed <= vehicle.max_speed && state.speed >= -vehicle.max_reverse_speed,
        "Speed {} out of bounds",
        state.speed
    );
    assert!(
        state.steering_angle.abs() <= vehicle.max_steering_angle + 1e-12,
        "Steering angle {} beyond lock",
        state.steering_angle
    );

    assert_relative_eq!(state.direction().norm(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(state.right().norm(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(state.direction().dot(&state.right()), 0.0, epsilon = 1e-9);
}

/// Assert every pooled segment carries the curvature of its own position and
/// that road remains ahead of `vehicle_z`.
#[track_caller]
pub fn assert_road_consistent(road: &RoadState, vehicle_z: f64) {
    for segment in &road.segments {
        assert_eq!(
            segment.x,
            road.curvature_at(segment.z),
            "Stale segment at z={}",
            segment.z
        );
    }
    assert!(
        road.max_extent >= vehicle_z,
        "Road ran out: extent {} behind vehicle {}",
        road.max_extent,
        vehicle_z
    );
}

/// Assert the vehicle is within the road band at its position
#[track_caller]
pub fn assert_on_track(state: &VehicleState, road: &RoadState) {
    let centre = road.curvature_at(state.position.z);
    assert!(
        (state.position.x - centre).abs() <= road.config.road_half_width,
        "Vehicle at x={} is off the road centred at {}",
        state.position.x,
        centre
    );
}

/// Assert two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
