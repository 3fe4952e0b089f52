//! Boundary containment.
//!
//! Six independent clamp-and-reverse checks per entity, run after movement:
//! x against the patrol left wall, patrol right wall and map right edge,
//! then the same three for y. The checks are deliberately not mutually
//! exclusive; when several fire in the same frame the later clamp wins, so
//! the map edge overrides the patrol wall. Near a corner this can produce a
//! one-frame snap. That matches the shipped behavior and stays.
//!
//! Each clamp also issues the opposite impulse, which is what turns the NPC
//! around on its next patrol step.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::Patrol;
use crate::components::rigidbody::RigidBody;
use crate::resources::mapbounds::MapBounds;

pub fn boundaries(
    mut query: Query<(&mut MapPosition, &mut RigidBody, &mut Patrol, &BoxCollider)>,
    map: Res<MapBounds>,
) {
    for (mut position, mut body, mut patrol, collider) in query.iter_mut() {
        let size = collider.size;
        let bounds = patrol.boundary;

        // Walked into the patrol left wall. Clamp to 0 if past the map
        // origin, else to the wall.
        if position.pos.x <= bounds.x {
            if position.pos.x <= 0.0 {
                position.pos.x = 0.0;
            } else {
                position.pos.x = bounds.x;
            }
            patrol.impulse_right(&mut body);
        }

        // Walked into the patrol right wall.
        if position.pos.x >= bounds.width - size.x {
            position.pos.x = bounds.width - size.x;
            patrol.impulse_left(&mut body);
        }

        // Walked off the map to the right. Overrides the patrol clamp.
        if position.pos.x >= map.width - size.x {
            position.pos.x = map.width - size.x;
            patrol.impulse_left(&mut body);
        }

        // Walked into the patrol top wall.
        if position.pos.y <= bounds.y {
            if position.pos.y <= 0.0 {
                position.pos.y = 0.0;
            } else {
                position.pos.y = bounds.y;
            }
            patrol.impulse_down(&mut body);
        }

        // Walked into the patrol bottom wall.
        if position.pos.y >= bounds.height - size.y {
            position.pos.y = bounds.height - size.y;
            patrol.impulse_up(&mut body);
        }

        // Walked off the map at the bottom. Overrides the patrol clamp.
        if position.pos.y >= map.height - size.y {
            position.pos.y = map.height - size.y;
            patrol.impulse_up(&mut body);
        }
    }
}
