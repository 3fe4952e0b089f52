//! World-space position component.
//!
//! [`MapPosition`] is the entity's top-left corner in map coordinates.
//! Movement integrates velocity into it; collision and rendering derive
//! everything else from it.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (top-left corner) of an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
