use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::npc::Npc;
use crate::components::patrol::Patrol;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

/// Exclusive render system. Takes the raylib handle out of the world for
/// the duration of the frame, draws the 2D pass and the debug overlay, and
/// puts it back. Draws read world state only; no motion state is mutated.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return; // headless world (tests)
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);

        let cam = world.resource::<Camera2DRes>().0;
        {
            let mut d2 = d.begin_mode2D(cam);
            render_pass(world, &mut d2);
        }
        render_debug_ui(world, &mut d);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}

/// We render inside raylib's drawing scopes and query the ECS World.
/// For culling we compute the world-rect visible by the camera using
/// Camera2D::screen_to_world and then do AABB rejection.
///
/// Per NPC the draw picks, in order: the turned sprite while the zombie
/// flag is set, the default sprite when one is configured, and otherwise a
/// solid rectangle of the NPC's color at its position and size. Each raylib
/// draw call carries its own style, so nothing leaks into later draws.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let cam = world.resource::<Camera2DRes>().0;
    let screen = *world.resource::<ScreenSize>();

    // Visible world-rectangle from the screen corners.
    let tl = d2.get_screen_to_world2D(Vector2 { x: 0.0, y: 0.0 }, cam);
    let br = d2.get_screen_to_world2D(
        Vector2 {
            x: screen.w as f32,
            y: screen.h as f32,
        },
        cam,
    );
    let view_min = Vector2 {
        x: tl.x.min(br.x),
        y: tl.y.min(br.y),
    };
    let view_max = Vector2 {
        x: tl.x.max(br.x),
        y: tl.y.max(br.y),
    };

    // Collect visible NPCs, sort by z, then draw.
    let mut to_draw: Vec<(Npc, MapPosition, BoxCollider, Option<Sprite>, ZIndex)> = {
        let mut q = world.query::<(&Npc, &MapPosition, &BoxCollider, Option<&Sprite>, &ZIndex)>();
        q.iter(world)
            .filter_map(|(npc, p, c, s, z)| {
                if !npc.visible {
                    return None;
                }
                let (min, max) = c.aabb(p.pos);
                let overlap = !(max.x < view_min.x
                    || min.x > view_max.x
                    || max.y < view_min.y
                    || min.y > view_max.y);
                if overlap {
                    Some((*npc, *p, *c, s.cloned(), *z))
                } else {
                    None
                }
            })
            .collect()
    };

    to_draw.sort_by_key(|(_, _, _, _, z)| *z);

    let textures = world.non_send_resource::<TextureStore>();

    for (npc, pos, collider, sprite, _z) in to_draw.iter() {
        let tex = sprite.as_ref().and_then(|s| {
            if npc.zombie {
                s.turned_tex_key
                    .as_deref()
                    .and_then(|key| textures.get(key))
            } else {
                textures.get(&s.tex_key)
            }
        });

        match (tex, sprite) {
            (Some(tex), Some(sprite)) => {
                // Source rect selects a frame from the spritesheet
                let src = Rectangle {
                    x: sprite.offset.x,
                    y: sprite.offset.y,
                    width: sprite.width,
                    height: sprite.height,
                };
                let dest = Rectangle {
                    x: pos.pos.x,
                    y: pos.pos.y,
                    width: sprite.width,
                    height: sprite.height,
                };
                d2.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
            }
            _ => {
                // No usable texture: solid rect at position, sized like the NPC.
                d2.draw_rectangle(
                    pos.pos.x as i32,
                    pos.pos.y as i32,
                    collider.size.x as i32,
                    collider.size.y as i32,
                    npc.color,
                );
            }
        }
    }

    if world.contains_resource::<DebugMode>() {
        // Collider AABBs
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
        // Patrol boundaries (stored as far edges, convert to extents)
        let mut patrols = world.query::<&Patrol>();
        for patrol in patrols.iter(world) {
            let b = patrol.boundary;
            d2.draw_rectangle_lines(
                b.x as i32,
                b.y as i32,
                (b.width - b.x) as i32,
                (b.height - b.y) as i32,
                Color::BLUE,
            );
        }
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    if world.contains_resource::<DebugMode>() {
        let fps = d.get_fps();
        let text = format!("DEBUG MODE | FPS: {}", fps);
        d.draw_text(&text, 10, 10, 10, Color::BLACK);

        let mut npcs = world.query::<&Npc>();
        let text = format!("NPCs: {}", npcs.iter(world).count());
        d.draw_text(&text, 10, 30, 10, Color::BLACK);

        let time = *world.resource::<WorldTime>();
        let text = format!("Frame: {} Elapsed: {:.1}s", time.frame_count, time.elapsed);
        d.draw_text(&text, 10, 50, 10, Color::BLACK);
    }
}
