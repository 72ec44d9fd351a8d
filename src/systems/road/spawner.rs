use bevy::prelude::*;
use nalgebra::Vector3;
use rand::Rng;

use crate::components::{Collectible, Lane, Obstacle, VehicleState};
use crate::resources::{EntitySpawnConfig, RaceRng, RoadState, SimulationConfig, SpawnConfig};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnReport {
    pub obstacles_spawned: usize,
    pub collectibles_spawned: usize,
    pub despawned: usize,
}

/// Random lane and longitudinal position ahead of the vehicle, placed on the
/// road centre line for that position.
fn placement<R: Rng + ?Sized>(
    road: &RoadState,
    config: &EntitySpawnConfig,
    vehicle_z: f64,
    rng: &mut R,
) -> (Lane, Vector3<f64>) {
    let ahead = if config.max_ahead > config.min_ahead {
        rng.gen_range(config.min_ahead..=config.max_ahead)
    } else {
        config.min_ahead
    };
    let lane = Lane::from_index(rng.gen_range(0..Lane::ALL.len()));
    let z = vehicle_z + ahead;
    let x = road.curvature_at(z) + lane.bias(road.config.lane_width);
    (lane, Vector3::new(x, config.height, z))
}

/// Count a cooldown down and report whether it expired this frame. An expired
/// cooldown restarts at the full interval whether or not anything spawns.
fn cooldown_expired(cooldown: &mut f64, interval: f64, dt: f64) -> bool {
    *cooldown -= dt;
    if *cooldown <= 0.0 {
        *cooldown = interval.max(0.0);
        true
    } else {
        false
    }
}

fn try_spawn_obstacle<R: Rng + ?Sized>(
    road: &mut RoadState,
    config: &SpawnConfig,
    vehicle_z: f64,
    rng: &mut R,
) -> bool {
    if road.obstacles.len() >= config.obstacles.max_alive {
        return false;
    }

    let (lane, position) = placement(road, &config.obstacles, vehicle_z, rng);
    let crowded = road
        .recent_obstacle_z
        .iter()
        .any(|z| (z - position.z).abs() < config.obstacle_min_spacing);
    if crowded {
        return false;
    }

    road.recent_obstacle_z.push_back(position.z);
    while road.recent_obstacle_z.len() > config.obstacle_spacing_memory {
        road.recent_obstacle_z.pop_front();
    }

    let id = road.allocate_id();
    road.obstacles.push(Obstacle {
        id,
        position,
        lane,
        half_extents: config.obstacles.half_extents,
    });
    true
}

fn try_spawn_collectible<R: Rng + ?Sized>(
    road: &mut RoadState,
    config: &SpawnConfig,
    vehicle_z: f64,
    rng: &mut R,
) -> bool {
    if road.collectibles.len() >= config.collectibles.max_alive {
        return false;
    }

    let (lane, position) = placement(road, &config.collectibles, vehicle_z, rng);
    let id = road.allocate_id();
    road.collectibles.push(Collectible {
        id,
        position,
        lane,
        half_extents: config.collectibles.half_extents,
    });
    true
}

/// Advance both spawn cooldowns, spawn what is due and allowed, and remove
/// entities that fell too far behind. Reaching a cap silently skips.
pub fn spawn_entities<R: Rng + ?Sized>(
    road: &mut RoadState,
    config: &SpawnConfig,
    vehicle_z: f64,
    dt: f64,
    rng: &mut R,
) -> SpawnReport {
    let mut report = SpawnReport::default();
    if !vehicle_z.is_finite() || !dt.is_finite() || dt < 0.0 {
        return report;
    }

    let before = road.obstacles.len() + road.collectibles.len();
    let cutoff = vehicle_z - config.despawn_distance;
    road.obstacles.retain(|obstacle| obstacle.position.z >= cutoff);
    road.collectibles.retain(|collectible| collectible.position.z >= cutoff);
    report.despawned = before - road.obstacles.len() - road.collectibles.len();

    if cooldown_expired(&mut road.obstacle_cooldown, config.obstacles.interval, dt)
        && try_spawn_obstacle(road, config, vehicle_z, rng)
    {
        report.obstacles_spawned += 1;
    }

    if cooldown_expired(&mut road.collectible_cooldown, config.collectibles.interval, dt)
        && try_spawn_collectible(road, config, vehicle_z, rng)
    {
        report.collectibles_spawned += 1;
    }

    report
}

pub fn spawn_system(
    mut road: ResMut<RoadState>,
    mut rng: ResMut<RaceRng>,
    config: Res<SimulationConfig>,
    time: Res<Time>,
    vehicles: Query<&VehicleState>,
) {
    let Ok(vehicle) = vehicles.get_single() else {
        return;
    };
    let dt = config.physics.clamp_delta_time(time.delta_secs_f64());

    spawn_entities(
        &mut road,
        &config.spawn,
        vehicle.longitudinal_position(),
        dt,
        &mut rng.spawner,
    );
}
