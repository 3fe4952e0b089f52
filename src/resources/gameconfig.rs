//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup when the file is missing or malformed.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [map]
//! descriptor = ./assets/map.json
//!
//! [npc]
//! count = 8
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_NPC_COUNT: u32 = 8;
const DEFAULT_MAP_DESCRIPTOR: &str = "./assets/map.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the map descriptor path and how many NPCs to
/// spawn at startup.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Number of NPCs spawned at startup.
    pub npc_count: u32,
    /// Path to the JSON map descriptor.
    pub map_descriptor: String,
    /// Path to the configuration file.
    pub config_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            npc_count: DEFAULT_NPC_COUNT,
            map_descriptor: DEFAULT_MAP_DESCRIPTOR.to_string(),
            config_path: DEFAULT_CONFIG_PATH.to_string(),
        }
    }

    /// Load values from the configuration file at `config_path`.
    ///
    /// Keys that are missing or unparsable keep their current values, so a
    /// partial file is fine.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)?;

        if let Ok(Some(w)) = ini.getuint("window", "width") {
            self.window_width = w as u32;
        }
        if let Ok(Some(h)) = ini.getuint("window", "height") {
            self.window_height = h as u32;
        }
        if let Ok(Some(fps)) = ini.getuint("window", "target_fps") {
            self.target_fps = fps as u32;
        }
        if let Ok(Some(count)) = ini.getuint("npc", "count") {
            self.npc_count = count as u32;
        }
        if let Some(path) = ini.get("map", "descriptor") {
            self.map_descriptor = path;
        }

        info!("Loaded configuration from {}", self.config_path);
        Ok(())
    }

    /// Save the configuration to the INI file at `config_path`.
    ///
    /// Creates the file if it doesn't exist.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut ini = Ini::new();

        ini.set("window", "width", Some(self.window_width.to_string()));
        ini.set("window", "height", Some(self.window_height.to_string()));
        ini.set("window", "target_fps", Some(self.target_fps.to_string()));
        ini.set("npc", "count", Some(self.npc_count.to_string()));
        ini.set("map", "descriptor", Some(self.map_descriptor.clone()));

        ini.write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved configuration to {}", self.config_path);
        Ok(())
    }
}
