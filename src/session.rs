use bevy::prelude::*;

use crate::components::{
    ChassisPose, CollisionReport, CollisionResponse, InputFlags, VehicleState,
};
use crate::resources::{RaceClock, RaceEvent, RaceRng, RoadState, SimulationConfig, WorldState};
use crate::systems::collisions::collision_events;
use crate::systems::{
    advance_vehicle, chassis_pose, check_collisions, collide_with_obstacle, maintain_road,
    spawn_entities, update_turn_ahead, vehicle_bounding_box, FrameTrace, MaintenanceReport,
    SpawnReport,
};

/// Everything one `advance` call produced, for collaborators that do not run
/// inside the ECS.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickReport {
    pub dt: f64,
    pub events: Vec<RaceEvent>,
    pub collisions: CollisionReport,
    pub collision_response: Option<CollisionResponse>,
    pub maintenance: MaintenanceReport,
    pub spawns: SpawnReport,
}

/// Single-vehicle race driven directly by the host's frame loop.
///
/// Runs the same stages as `RacePlugin`, in the same order: vehicle physics,
/// road maintenance and turn-ahead, spawning, then collisions.
#[derive(Debug, Clone)]
pub struct RaceSession {
    config: SimulationConfig,
    vehicle: VehicleState,
    road: RoadState,
    rng: RaceRng,
    clock: RaceClock,
    trace: Option<FrameTrace>,
}

impl RaceSession {
    /// Start a session. An invalid config is replaced by the defaults.
    pub fn new(config: SimulationConfig) -> Self {
        let config = config.validated_or_default();
        let rng = RaceRng::from_seed(config.seed);
        info!("Race session starting with master seed {}", rng.master_seed);

        Self {
            vehicle: VehicleState::new(&config.vehicle, &config.physics),
            road: RoadState::new(config.road.clone()),
            rng,
            clock: RaceClock::default(),
            trace: None,
            config,
        }
    }

    /// Put the vehicle back at the start pose and rebuild the road. The RNG
    /// streams carry on.
    pub fn reset(&mut self) {
        self.vehicle.reset(&self.config.vehicle, &self.config.physics);
        self.road.reset();
        self.clock = RaceClock::default();
    }

    /// Record a `FrameTrace` on every following step.
    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace = enabled.then(FrameTrace::default);
    }

    pub fn advance(&mut self, input: &InputFlags, dt: f64) -> TickReport {
        let config = &self.config;

        let outcome = advance_vehicle(
            &mut self.vehicle,
            &config.vehicle,
            &config.handling,
            &config.physics,
            input,
            dt,
            &self.road,
            self.trace.as_mut(),
        );
        let dt = outcome.dt;
        let mut events = outcome.events;

        let vehicle_z = self.vehicle.longitudinal_position();
        let maintenance = maintain_road(&mut self.road, vehicle_z, self.clock.tick);
        events.extend(update_turn_ahead(&mut self.road, vehicle_z));

        let spawns = spawn_entities(
            &mut self.road,
            &config.spawn,
            vehicle_z,
            dt,
            &mut self.rng.spawner,
        );

        let hitbox = vehicle_bounding_box(&self.vehicle, &config.vehicle);
        let collisions = check_collisions(&mut self.road, &hitbox);
        let collision_response = (!collisions.hit_obstacles.is_empty()).then(|| {
            collide_with_obstacle(&mut self.vehicle, &config.physics, &mut self.rng.collision)
        });
        events.extend(collision_events(
            &collisions,
            collision_response.as_ref().map(|response| response.speed_reduction),
        ));

        self.clock.advance(dt);

        TickReport {
            dt,
            events,
            collisions,
            collision_response,
            maintenance,
            spawns,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    /// Direct access for hosts that inject state, e.g. a checkpoint restore.
    pub fn vehicle_mut(&mut self) -> &mut VehicleState {
        &mut self.vehicle
    }

    pub fn road(&self) -> &RoadState {
        &self.road
    }

    pub fn road_mut(&mut self) -> &mut RoadState {
        &mut self.road
    }

    pub fn clock(&self) -> &RaceClock {
        &self.clock
    }

    pub fn master_seed(&self) -> u64 {
        self.rng.master_seed
    }

    pub fn last_trace(&self) -> Option<&FrameTrace> {
        self.trace.as_ref()
    }

    /// Turn intensity at the vehicle.
    pub fn current_curvature(&self) -> f64 {
        self.road.turn_intensity(self.vehicle.longitudinal_position())
    }

    pub fn world_state(&self) -> WorldState<'_> {
        self.road.world_state(self.vehicle.longitudinal_position())
    }

    pub fn chassis_pose(&self) -> ChassisPose {
        chassis_pose(&self.vehicle, &self.config.vehicle)
    }
}
