//! Zombietown main entry point.
//!
//! A small 2D game built with:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! NPCs spawn at random positions, each with a patrol path (horizontal,
//! vertical or static) and a patrol boundary rolled from its spawn point.
//! Every frame the schedule runs the patrol step, integrates movement,
//! clamps against the patrol walls and map edges, detects contacts and
//! draws.

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use raylib::prelude::*;

use crate::events::collision::collision_observer;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::mapbounds::MapBounds;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::boundaries::boundaries;
use crate::systems::collision::collision_detector;
use crate::systems::movement::movement;
use crate::systems::patrol::patrol_step;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Zombietown
#[derive(Parser)]
#[command(version, about = "Patrolling NPCs in a 2D map")]
struct Cli {
    /// Number of NPCs to spawn (overrides the config file)
    #[arg(long)]
    npcs: Option<u32>,

    /// RNG seed for reproducible patrol boundaries and placement
    #[arg(long)]
    seed: Option<u64>,

    /// Enable the debug overlay (colliders, patrol boundaries, FPS)
    #[arg(long)]
    debug: bool,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Some(seed) = cli.seed {
        fastrand::seed(seed);
    }

    let mut config = GameConfig::new();
    if let Some(path) = cli.config {
        config.config_path = path;
    }
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(npcs) = cli.npcs {
        config.npc_count = npcs;
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Zombietown")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let map_bounds = match MapBounds::load_from_file(&config.map_descriptor) {
        Ok(bounds) => bounds,
        Err(e) => {
            log::warn!("{e}; using default map extent");
            MapBounds::default()
        }
    };

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(map_bounds);
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(Camera2DRes(Camera2D {
        offset: Vector2::zero(),
        target: Vector2::zero(),
        rotation: 0.0,
        zoom: 1.0,
    }));
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    let mut textures = TextureStore::new();
    game::load_npc_textures(&mut rl, &thread, &mut textures);
    let with_sprites = textures.contains(game::NPC_TEX_KEY);
    world.insert_non_send_resource(textures);

    let npc_count = config.npc_count;
    world.insert_resource(config);

    game::spawn_npcs(&mut world, npc_count, with_sprites);

    world.spawn(Observer::new(collision_observer));
    // Ensure the observer is registered before any system triggers events.
    world.flush();

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems(patrol_step);
    update.add_systems(movement.after(patrol_step));
    update.add_systems(boundaries.after(movement));
    update.add_systems(collision_detector.after(boundaries));
    update.add_systems(render_system.after(collision_detector));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!("Zombietown up: {npc_count} NPCs on the map");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Window may have been resized
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let mut screen = world.resource_mut::<ScreenSize>();
        screen.w = new_w;
        screen.h = new_h;
    }
}
