//! Debug toggle resource.
//!
//! The mere presence of this resource turns on the debug draws: collider
//! AABBs, patrol boundary rectangles and the FPS/frame readout. Inserted
//! when the game starts with `--debug`; remove it and the render pass draws
//! NPCs only. The patrol logic never reads it.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render systems draw overlays.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
