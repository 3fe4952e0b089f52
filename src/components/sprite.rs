use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its size in world units.
/// `turned_tex_key` selects the alternate texture drawn while the owning
/// NPC's zombie flag is set. The offset selects a frame if the texture is a
/// spritesheet.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub turned_tex_key: Option<String>,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
}
