//! Map extent resource.
//!
//! The map is a flat rectangle; NPCs are clamped against its edges no matter
//! how large their patrol boundary rolled. The extent can be loaded from a
//! small JSON descriptor so maps of different sizes don't need a rebuild.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

const DEFAULT_MAP_WIDTH: f32 = 2048.0;
const DEFAULT_MAP_HEIGHT: f32 = 2048.0;

/// World-space extent of the map in units. Read by the boundary system.
#[derive(Resource, Clone, Copy, Debug, Deserialize, Serialize)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
        }
    }
}

impl MapBounds {
    /// Load the extent from a JSON descriptor file.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read map descriptor {path}: {e}"))?;
        serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse map descriptor {path}: {e}"))
    }
}
