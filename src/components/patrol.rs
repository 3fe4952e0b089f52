//! Patrol movement component.
//!
//! A patrolling NPC walks back and forth inside a boundary rectangle picked
//! at spawn time: a random 4-10 multiple of the NPC size per axis, anchored
//! at the spawn position. The patrol path is chosen once from an index and
//! only ever changes through [`Patrol::stop`], which parks the NPC for good.
//!
//! Movement is impulse-driven: each frame the patrol system issues an
//! impulse along the current direction, adding `speed` to one velocity axis.
//! The boundary system issues the opposite impulse when the NPC runs into a
//! wall, which is what actually turns it around.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

use super::rigidbody::RigidBody;

/// Velocity added by a single directional impulse, in world units.
pub const NPC_SPEED: f32 = 18.0;

/// Patrol mode. Chosen at spawn from an index; out-of-range indices fall
/// back to `Horizontal` instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatrolPath {
    Horizontal,
    Vertical,
    Static,
}

impl PatrolPath {
    /// Map a path index (0, 1, 2) to a patrol mode. Anything else defaults
    /// to `Horizontal`.
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => PatrolPath::Horizontal,
            1 => PatrolPath::Vertical,
            2 => PatrolPath::Static,
            _ => PatrolPath::Horizontal,
        }
    }
}

/// Last movement direction. Selects which impulse the patrol step issues
/// and which sprite variant a renderer may pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Patrol state: path, facing direction, impulse speed and the boundary
/// rectangle the NPC walks in.
///
/// The boundary stores far edges, not extents: `width` and `height` are the
/// world coordinates of the right/bottom walls (`x + span`), so
/// `width > x` and `height > y` always hold.
#[derive(Component, Clone, Copy, Debug)]
pub struct Patrol {
    pub path: PatrolPath,
    pub direction: Direction,
    pub speed: f32,
    pub boundary: Rectangle,
}

impl Patrol {
    /// Build the patrol state for an NPC spawned at `spawn` with the given
    /// size. The boundary spans a random 4-10 multiple of the size per axis.
    pub fn new(spawn: Vector2, size: Vector2, path_index: i32) -> Self {
        let boundary = Rectangle {
            x: spawn.x,
            y: spawn.y,
            width: size.x * fastrand::u32(4..=10) as f32 + spawn.x,
            height: size.y * fastrand::u32(4..=10) as f32 + spawn.y,
        };
        Self {
            path: PatrolPath::from_index(path_index),
            direction: Direction::Up,
            speed: NPC_SPEED,
            boundary,
        }
    }

    /// Park the NPC: force the path to `Static`. Terminal, nothing switches
    /// it back.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn stop(&mut self) {
        self.path = PatrolPath::Static;
    }

    pub fn impulse_up(&mut self, body: &mut RigidBody) {
        body.velocity.y -= self.speed;
        self.direction = Direction::Up;
    }

    pub fn impulse_down(&mut self, body: &mut RigidBody) {
        body.velocity.y += self.speed;
        self.direction = Direction::Down;
    }

    pub fn impulse_left(&mut self, body: &mut RigidBody) {
        body.velocity.x -= self.speed;
        self.direction = Direction::Left;
    }

    pub fn impulse_right(&mut self, body: &mut RigidBody) {
        body.velocity.x += self.speed;
        self.direction = Direction::Right;
    }
}
