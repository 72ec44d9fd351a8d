use bevy::prelude::*;

use crate::components::{ChassisPose, InputFlags, VehicleState};
use crate::resources::{RaceClock, RaceEvent, RaceRng, RoadState, SimulationConfig};
use crate::systems::{
    chassis_pose_system, collision_system, road_maintenance_system, spawn_system,
    vehicle_physics_system,
};

/// Frame stages, run strictly in this order every `Update`.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum RaceSet {
    Physics,
    Road,
    Spawning,
    Collision,
    Presentation,
}

/// Wires the vehicle integrator, the road provider and the collision pass
/// into one ordered frame step. The host writes `InputFlags` each frame and
/// reads `RaceEvent`s afterwards.
pub struct RacePlugin {
    pub config: SimulationConfig,
}

impl RacePlugin {
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Default for RacePlugin {
    fn default() -> Self {
        Self::with_config(SimulationConfig::default())
    }
}

impl Plugin for RacePlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone().validated_or_default();
        let rng = RaceRng::from_seed(config.seed);
        info!("Race plugin starting with master seed {}", rng.master_seed);

        app.insert_resource(RoadState::new(config.road.clone()))
            .insert_resource(config)
            .insert_resource(rng)
            .init_resource::<RaceClock>()
            .init_resource::<InputFlags>()
            .add_event::<RaceEvent>();

        app.configure_sets(
            Update,
            (
                RaceSet::Physics,
                RaceSet::Road,
                RaceSet::Spawning,
                RaceSet::Collision,
                RaceSet::Presentation,
            )
                .chain(),
        );

        app.add_systems(Startup, spawn_vehicle);
        app.add_systems(
            Update,
            (
                vehicle_physics_system.in_set(RaceSet::Physics),
                road_maintenance_system.in_set(RaceSet::Road),
                spawn_system.in_set(RaceSet::Spawning),
                collision_system.in_set(RaceSet::Collision),
                (chassis_pose_system, advance_clock_system)
                    .chain()
                    .in_set(RaceSet::Presentation),
            ),
        );
    }
}

fn spawn_vehicle(mut commands: Commands, config: Res<SimulationConfig>) {
    commands.spawn((
        VehicleState::new(&config.vehicle, &config.physics),
        ChassisPose::default(),
        Name::new("Player Vehicle"),
    ));
}

fn advance_clock_system(
    mut clock: ResMut<RaceClock>,
    config: Res<SimulationConfig>,
    time: Res<Time>,
) {
    clock.advance(config.physics.clamp_delta_time(time.delta_secs_f64()));
}
