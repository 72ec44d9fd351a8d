use rand::Rng;

use crate::components::{BoundingBox, CollisionResponse, EffectTag, VehicleConfig, VehicleState};
use crate::resources::PhysicsConfig;
use crate::systems::physics::apply_ground_floor;
use crate::utils::{COLLISION_ANGULAR_KICK, COLLISION_BUMP, COLLISION_SPEED_CAP};

/// World AABB of the vehicle's hitbox, laid along its heading frame. The
/// half extents are smaller than the visual body.
pub fn vehicle_bounding_box(state: &VehicleState, config: &VehicleConfig) -> BoundingBox {
    BoundingBox::oriented(state.position, &state.frame, config.hitbox_half_extents)
}

/// Obstacle impact: shed up to a fixed cap of speed, rescale the velocity to
/// match, bounce the body up and kick the yaw rate by a bounded random
/// amount. Depends only on the current state.
pub fn collide_with_obstacle<R: Rng + ?Sized>(
    state: &mut VehicleState,
    physics: &PhysicsConfig,
    rng: &mut R,
) -> CollisionResponse {
    let old_speed = state.speed.abs();
    let speed_reduction = old_speed.min(COLLISION_SPEED_CAP);
    let new_speed = old_speed - speed_reduction;

    let scale = if old_speed > f64::EPSILON {
        new_speed / old_speed
    } else {
        0.0
    };
    state.speed *= scale;
    state.velocity *= scale;

    state.velocity.y = COLLISION_BUMP;
    state.angular_velocity += rng.gen_range(-COLLISION_ANGULAR_KICK..=COLLISION_ANGULAR_KICK);
    apply_ground_floor(state, physics);

    CollisionResponse {
        speed_reduction,
        effects: vec![
            EffectTag::CameraShake,
            EffectTag::ImpactSparks,
            EffectTag::ImpactSound,
        ],
    }
}
