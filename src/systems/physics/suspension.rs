use crate::components::{VehicleConfig, VehicleState};
use crate::utils::WHEEL_COUNT;

/// Place each wheel in the world, measure its compression against a flat
/// ground plane at height zero and report whether any wheel touches.
///
/// Spring forces are returned for diagnostics only. Damping uses the body's
/// vertical velocity rather than a per-wheel velocity.
pub fn update_suspension(state: &mut VehicleState, config: &VehicleConfig) -> [f64; WHEEL_COUNT] {
    let rest_height = config.suspension_rest_height();
    let vertical_velocity = state.velocity.y;
    let mut spring_forces = [0.0; WHEEL_COUNT];

    for (wheel, spring_force) in state.wheels.iter_mut().zip(spring_forces.iter_mut()) {
        wheel.contact_point = state.position + state.frame.to_world(&wheel.local_offset);
        wheel.compression = (rest_height - wheel.contact_point.y).max(0.0);
        wheel.on_ground = wheel.compression > 0.0;
        *spring_force = if wheel.on_ground {
            wheel.compression * config.suspension_stiffness
                - config.suspension_damping * vertical_velocity
        } else {
            0.0
        };
    }

    state.is_grounded = state.wheels.iter().any(|wheel| wheel.on_ground);
    spring_forces
}
