//! Patrol directional step.
//!
//! Once per tick, every patrolling NPC gets an impulse along its current
//! direction, chosen by path: horizontal NPCs push right or left, vertical
//! NPCs push up or down, static NPCs get nothing. The impulse is
//! unconditional; without the boundary system reversing it, velocity would
//! grow along that axis every frame. Friction in the movement system is
//! what keeps the result bounded in practice.

use bevy_ecs::prelude::*;

use crate::components::patrol::{Direction, Patrol, PatrolPath};
use crate::components::rigidbody::RigidBody;

/// Issue the per-frame directional impulse for each patrolling entity.
pub fn patrol_step(mut query: Query<(&mut Patrol, &mut RigidBody)>) {
    for (mut patrol, mut body) in query.iter_mut() {
        match patrol.path {
            PatrolPath::Horizontal => {
                if patrol.direction == Direction::Right {
                    patrol.impulse_right(&mut body);
                } else {
                    patrol.impulse_left(&mut body);
                }
            }
            PatrolPath::Vertical => {
                if patrol.direction == Direction::Up {
                    patrol.impulse_up(&mut body);
                } else {
                    patrol.impulse_down(&mut body);
                }
            }
            PatrolPath::Static => {}
        }
    }
}
