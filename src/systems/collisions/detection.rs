use bevy::prelude::*;

use crate::components::{BoundingBox, CollisionReport, VehicleState};
use crate::resources::{RaceEvent, RaceEventKind, RaceRng, RoadState, SimulationConfig};
use crate::systems::collisions::{collide_with_obstacle, vehicle_bounding_box};

/// Remove every obstacle and collectible overlapping `hitbox` and return them.
pub fn check_collisions(road: &mut RoadState, hitbox: &BoundingBox) -> CollisionReport {
    let (hit_obstacles, obstacles): (Vec<_>, Vec<_>) = std::mem::take(&mut road.obstacles)
        .into_iter()
        .partition(|obstacle| obstacle.bounding_box().intersects(hitbox));
    road.obstacles = obstacles;

    let (hit_collectibles, collectibles): (Vec<_>, Vec<_>) = std::mem::take(&mut road.collectibles)
        .into_iter()
        .partition(|collectible| collectible.bounding_box().intersects(hitbox));
    road.collectibles = collectibles;

    CollisionReport {
        hit_obstacles,
        hit_collectibles,
    }
}

/// Notifications for a detection pass. Obstacle hits carry the speed lost.
pub fn collision_events(report: &CollisionReport, speed_reduction: Option<f64>) -> Vec<RaceEvent> {
    let obstacles = report.hit_obstacles.iter().map(|_| match speed_reduction {
        Some(reduction) => RaceEvent::with_value(RaceEventKind::ObstacleHit, reduction),
        None => RaceEvent::new(RaceEventKind::ObstacleHit),
    });
    let collectibles = report
        .hit_collectibles
        .iter()
        .map(|_| RaceEvent::new(RaceEventKind::CollectibleCollected));
    obstacles.chain(collectibles).collect()
}

/// Detection followed by at most one obstacle response per pass.
pub fn collision_system(
    mut vehicles: Query<&mut VehicleState>,
    mut road: ResMut<RoadState>,
    mut rng: ResMut<RaceRng>,
    config: Res<SimulationConfig>,
    mut events: EventWriter<RaceEvent>,
) {
    let Ok(mut vehicle) = vehicles.get_single_mut() else {
        return;
    };

    let hitbox = vehicle_bounding_box(&vehicle, &config.vehicle);
    let report = check_collisions(&mut road, &hitbox);
    if report.is_empty() {
        return;
    }

    let response = (!report.hit_obstacles.is_empty()).then(|| {
        collide_with_obstacle(&mut vehicle, &config.physics, &mut rng.collision)
    });
    if let Some(response) = &response {
        debug!(
            "Hit {} obstacle(s), lost {:.1} speed",
            report.hit_obstacles.len(),
            response.speed_reduction
        );
    }

    events.send_batch(collision_events(
        &report,
        response.map(|response| response.speed_reduction),
    ));
}
