//! NPC gameplay stats.
//!
//! Everything about an NPC that the motion logic never touches: health,
//! strength, score, flags and the fallback fill color used when no sprite
//! is loaded.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

/// Default NPC size in world units, both axes.
pub const NPC_SIZE: f32 = 64.0;

/// Fallback fill color for NPCs without a sprite.
pub const NPC_COLOR: Color = Color::new(255, 0, 153, 255);

/// Gameplay stats and rendering flags for an NPC.
#[derive(Component, Clone, Copy, Debug)]
pub struct Npc {
    #[allow(dead_code)]
    pub health: i32,
    #[allow(dead_code)]
    pub strength: i32,
    #[allow(dead_code)]
    pub points: i32,
    /// When set, the renderer draws the turned sprite variant.
    pub zombie: bool,
    pub visible: bool,
    pub color: Color,
}

impl Default for Npc {
    fn default() -> Self {
        Self {
            health: 100,
            strength: 5,
            points: 0,
            zombie: false,
            visible: true,
            color: NPC_COLOR,
        }
    }
}
