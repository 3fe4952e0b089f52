//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The patrol logic never reads it; it is
//! carried for the render pass.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Camera2D;

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);
