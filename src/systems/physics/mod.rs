mod controls;
mod force_calculator;
mod integrator;
mod surface;
mod suspension;
mod trace;

pub use controls::{effective_steering, steering_effectiveness, update_steering};
pub use force_calculator::{
    cornering, launch_multiplier, longitudinal_forces, Cornering, DriveMode, LongitudinalForces,
};
pub use integrator::{apply_ground_floor, integrate_state, FrameAccelerations};
pub use surface::{apply_surface, SurfaceBand};
pub use suspension::update_suspension;
pub use trace::FrameTrace;

use bevy::prelude::*;

use crate::components::{
    ControlState, HandlingConfig, HeadingFrame, InputFlags, VehicleConfig, VehicleState,
};
use crate::resources::{PhysicsConfig, RaceEvent, RoadState, SimulationConfig};
use crate::systems::road::RoadQuery;

/// What one vehicle step actually did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StepOutcome {
    /// Delta time after clamping
    pub dt: f64,
    pub events: Vec<RaceEvent>,
}

/// Advance the vehicle by one frame.
///
/// Stages run in a fixed order: controls, steering effectiveness,
/// suspension, longitudinal forces, cornering, integration, surface and
/// finally the heading frame refresh. The step never fails; a degenerate
/// `dt` is clamped and a zero step only refreshes the resolved controls.
pub fn advance_vehicle<R: RoadQuery + ?Sized>(
    state: &mut VehicleState,
    vehicle: &VehicleConfig,
    handling: &HandlingConfig,
    physics: &PhysicsConfig,
    input: &InputFlags,
    dt: f64,
    road: &R,
    trace: Option<&mut FrameTrace>,
) -> StepOutcome {
    if !dt.is_finite() {
        warn!("Non-finite delta time {dt}, skipping vehicle step");
    }
    let dt = physics.clamp_delta_time(dt);
    let mut outcome = StepOutcome {
        dt,
        events: Vec::new(),
    };

    state.controls = ControlState::resolve(input);
    if dt <= 0.0 {
        return outcome;
    }

    update_steering(state, vehicle, input, dt);
    let steering = effective_steering(state, vehicle, handling);

    let spring_forces = update_suspension(state, vehicle);

    let longitudinal = longitudinal_forces(state, vehicle);
    let turning = cornering(state, steering, vehicle, handling);
    let accelerations = FrameAccelerations {
        forward: longitudinal.acceleration(vehicle.mass),
        lateral: turning.lateral_acceleration,
        angular: turning.angular_acceleration,
        mode: longitudinal.mode,
    };

    integrate_state(state, &accelerations, vehicle, physics, dt);

    apply_surface(state, vehicle, handling, input, road, dt, &mut outcome.events);

    state.frame = HeadingFrame::from_yaw(state.yaw);

    if let Some(trace) = trace {
        *trace = FrameTrace {
            dt,
            controls: state.controls,
            effective_steering: steering,
            tractive_force: longitudinal.tractive,
            drag_force: longitudinal.drag,
            rolling_force: longitudinal.rolling,
            forward_acceleration: accelerations.forward,
            angular_acceleration: accelerations.angular,
            traction_loss: turning.traction_loss,
            spring_forces,
            grounded: state.is_grounded,
            off_road: state.is_off_road,
        };
    }

    outcome
}

/// Steps every vehicle entity with the host-written input snapshot.
pub fn vehicle_physics_system(
    mut query: Query<&mut VehicleState>,
    input: Res<InputFlags>,
    config: Res<SimulationConfig>,
    road: Res<RoadState>,
    time: Res<Time>,
    mut events: EventWriter<RaceEvent>,
) {
    let dt = time.delta_secs_f64();

    for mut state in query.iter_mut() {
        let outcome = advance_vehicle(
            &mut state,
            &config.vehicle,
            &config.handling,
            &config.physics,
            &input,
            dt,
            &*road,
            None,
        );
        events.send_batch(outcome.events);
    }
}
