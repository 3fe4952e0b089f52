//! Position integration and velocity decay.
//!
//! `position += velocity * friction` per axis, then `velocity *= friction`.
//! Friction scales displacement directly rather than acting as drag during
//! integration; the decay afterwards is what bleeds off the impulse between
//! frames. The physics is frame-stepped on purpose and does not read the
//! tick interval.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;

pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>) {
    for (mut position, mut body) in query.iter_mut() {
        let friction = body.friction;
        let delta = body.velocity.scale_by(friction);
        position.pos = position.pos + delta;

        body.velocity.x *= friction;
        body.velocity.y *= friction;
    }
}
