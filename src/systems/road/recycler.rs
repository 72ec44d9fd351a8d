use bevy::prelude::*;

use crate::components::VehicleState;
use crate::resources::{RaceClock, RaceEvent, RaceEventKind, RoadState};

/// What one maintenance pass did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceReport {
    pub recycled: usize,
    pub resynced: bool,
    pub emergency: bool,
}

/// Move segment `index` ahead of the furthest known segment if it has
/// fallen behind the trailing distance. Its lateral offset is recomputed
/// for the new position.
fn recycle_segment(road: &mut RoadState, index: usize, vehicle_z: f64) -> bool {
    let cutoff = vehicle_z - road.config.trailing_distance;
    let length = road.config.segment_length;

    let Some(segment) = road.segments.get(index) else {
        return false;
    };
    if segment.z >= cutoff {
        return false;
    }

    let z = road.max_extent.max(cutoff) + length;
    let x = road.config.track.curvature_at(z);
    if let Some(segment) = road.segments.get_mut(index) {
        segment.z = z;
        segment.x = x;
    }
    road.max_extent = z;
    true
}

fn recycle_all(road: &mut RoadState, vehicle_z: f64) -> usize {
    (0..road.segments.len())
        .filter(|&index| recycle_segment(road, index, vehicle_z))
        .count()
}

/// Run the scheduled maintenance for `tick`.
///
/// The light pass examines a rotating batch of segments; the resync
/// recomputes the tracked extents from every segment. Whenever less than
/// `emergency_margin` of road remains ahead, every segment is checked at
/// once regardless of cadence.
pub fn maintain_road(road: &mut RoadState, vehicle_z: f64, tick: u64) -> MaintenanceReport {
    let mut report = MaintenanceReport::default();
    let pool_size = road.segments.len();
    if pool_size == 0 || !vehicle_z.is_finite() {
        return report;
    }

    let plan = road.config.maintenance.plan(tick, pool_size);

    if plan.resync {
        road.refresh_extents();
        report.resynced = true;
        trace!(
            "Road resync at tick {tick}: extents {:.1}..{:.1}",
            road.min_extent,
            road.max_extent
        );
    }

    if let Some(range) = plan.light {
        for index in range {
            if recycle_segment(road, index % pool_size, vehicle_z) {
                report.recycled += 1;
            }
        }
    }

    if road.remaining_ahead(vehicle_z) < road.config.emergency_margin {
        warn!(
            "Only {:.1} of road left ahead of z={vehicle_z:.1}, forcing a full recycle",
            road.remaining_ahead(vehicle_z)
        );
        report.recycled += recycle_all(road, vehicle_z);
        road.refresh_extents();
        report.emergency = true;
    }

    report
}

/// Latch the turn-ahead notification when the intensity `turn_lookahead`
/// ahead crosses the threshold, and release it once it drops back.
pub fn update_turn_ahead(road: &mut RoadState, vehicle_z: f64) -> Option<RaceEvent> {
    let target = road.world_state(vehicle_z).target_curvature;
    let active = target.abs() > road.config.turn_notify_threshold;
    let rising = active && !road.turn_ahead_active;
    road.turn_ahead_active = active;

    rising.then(|| {
        debug!("Turn ahead of z={vehicle_z:.1}, intensity {target:.2}");
        RaceEvent::with_value(RaceEventKind::TurnAhead, target)
    })
}

pub fn road_maintenance_system(
    mut road: ResMut<RoadState>,
    clock: Res<RaceClock>,
    vehicles: Query<&VehicleState>,
    mut events: EventWriter<RaceEvent>,
) {
    let Ok(vehicle) = vehicles.get_single() else {
        return;
    };
    let vehicle_z = vehicle.longitudinal_position();

    maintain_road(&mut road, vehicle_z, clock.tick);
    if let Some(event) = update_turn_ahead(&mut road, vehicle_z) {
        events.send(event);
    }
}
