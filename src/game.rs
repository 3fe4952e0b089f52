//! High-level game setup: NPC construction and world population.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::existence::Existence;
use crate::components::mapposition::MapPosition;
use crate::components::npc::{NPC_SIZE, Npc};
use crate::components::patrol::Patrol;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::mapbounds::MapBounds;
use crate::resources::texturestore::TextureStore;

/// Texture keys the NPC sprites are registered under.
pub const NPC_TEX_KEY: &str = "npc";
pub const NPC_TURNED_TEX_KEY: &str = "npc_turned";

/// Spawn-time options for a single NPC.
///
/// `path` is an index: 0 horizontal, 1 vertical, 2 static. Out-of-range
/// values fall back to horizontal.
#[derive(Clone, Copy, Debug)]
pub struct NpcOptions {
    pub position: Vector2,
    pub path: i32,
}

/// Build the component set for one NPC.
///
/// Friction is sampled here, once, and the patrol boundary is rolled from
/// the spawn position. Map and camera stay world resources; the NPC only
/// carries its own state.
pub fn npc_bundle(
    options: &NpcOptions,
) -> (
    Npc,
    Existence,
    MapPosition,
    RigidBody,
    BoxCollider,
    Patrol,
    ZIndex,
) {
    let size = Vector2::new(NPC_SIZE, NPC_SIZE);
    (
        Npc::default(),
        Existence::default(),
        MapPosition::new(options.position.x, options.position.y),
        RigidBody::sampled(),
        BoxCollider::new(size.x, size.y),
        Patrol::new(options.position, size, options.path),
        ZIndex(0),
    )
}

/// Sprite component for an NPC, pointing at the registered texture keys.
pub fn npc_sprite() -> Sprite {
    Sprite {
        tex_key: NPC_TEX_KEY.to_string(),
        turned_tex_key: Some(NPC_TURNED_TEX_KEY.to_string()),
        width: NPC_SIZE,
        height: NPC_SIZE,
        offset: Vector2::zero(),
    }
}

/// Try to load the NPC textures into the store. Missing files only cost us
/// the sprites; NPCs fall back to solid rectangles.
pub fn load_npc_textures(rl: &mut RaylibHandle, thread: &RaylibThread, store: &mut TextureStore) {
    for (key, path) in [
        (NPC_TEX_KEY, "./assets/npc.png"),
        (NPC_TURNED_TEX_KEY, "./assets/npc_turned.png"),
    ] {
        match rl.load_texture(thread, path) {
            Ok(texture) => store.insert(key, texture),
            Err(e) => log::warn!("Could not load {path}: {e}"),
        }
    }
}

/// Populate the world with `count` NPCs at random positions inside the map,
/// cycling through the three patrol paths.
pub fn spawn_npcs(world: &mut World, count: u32, with_sprites: bool) {
    let map = *world.resource::<MapBounds>();
    for i in 0..count {
        let position = Vector2 {
            x: fastrand::f32() * (map.width - NPC_SIZE).max(0.0),
            y: fastrand::f32() * (map.height - NPC_SIZE).max(0.0),
        };
        let options = NpcOptions {
            position,
            path: (i % 3) as i32,
        };
        let entity = world.spawn(npc_bundle(&options)).id();
        if with_sprites {
            world.entity_mut(entity).insert(npc_sprite());
        }
        log::debug!(
            "Spawned NPC {entity:?} at ({:.0}, {:.0}) path {}",
            position.x,
            position.y,
            options.path
        );
    }
}
