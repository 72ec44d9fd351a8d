use bevy::prelude::*;

use crate::components::{HandlingConfig, InputFlags, VehicleConfig, VehicleState};
use crate::resources::{RaceEvent, RaceEventKind};
use crate::systems::road::RoadQuery;
use crate::utils::sign_or_zero;

/// Road centre and half width the vehicle is tested against this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBand {
    pub center: f64,
    pub half_width: f64,
}

impl SurfaceBand {
    pub fn locate<R: RoadQuery + ?Sized>(road: &R, z: f64) -> Self {
        match road.nearest_segment_offset(z) {
            Some(center) if center.is_finite() => Self {
                center,
                half_width: road.half_width(),
            },
            _ => Self {
                center: 0.0,
                half_width: road.fallback_half_width(),
            },
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        (x - self.center).abs() <= self.half_width
    }
}

/// Off-road detection and its edge effects.
///
/// Entry and exit are edge-triggered against the previous frame's flag. An
/// entry above `offroad_entry_speed` slows the car, bumps it upward and is
/// reported; a slower entry passes silently. While off-road, speed decays
/// slowly and, if the player is not steering, the wheel is eased toward the
/// road centre.
pub fn apply_surface<R: RoadQuery + ?Sized>(
    state: &mut VehicleState,
    config: &VehicleConfig,
    handling: &HandlingConfig,
    input: &InputFlags,
    road: &R,
    dt: f64,
    events: &mut Vec<RaceEvent>,
) {
    let band = SurfaceBand::locate(road, state.longitudinal_position());

    state.was_off_road = state.is_off_road;
    state.is_off_road = !band.contains(state.position.x);

    if state.is_off_road && !state.was_off_road {
        let speed = state.speed;
        if speed.abs() > handling.offroad_entry_speed {
            state.set_speed(speed * handling.offroad_entry_slowdown);
            state.velocity.y += handling.offroad_entry_bump;
            debug!("Vehicle left the road at z={:.1}, speed {:.1}", state.position.z, speed);
            events.push(RaceEvent::with_value(RaceEventKind::OffRoadEntered, speed));
        }
    } else if !state.is_off_road && state.was_off_road {
        debug!("Vehicle back on the road at z={:.1}", state.position.z);
        events.push(RaceEvent::new(RaceEventKind::OffRoadExited));
    }

    if state.is_off_road {
        state.set_speed(state.speed * handling.offroad_speed_decay);

        if !input.is_steering() {
            let target = sign_or_zero(band.center - state.position.x)
                * config.max_steering_angle
                * handling.recovery_bias;
            let blend = (handling.recovery_rate * dt).min(1.0);
            state.steering_angle += (target - state.steering_angle) * blend;
        }
    }
}
