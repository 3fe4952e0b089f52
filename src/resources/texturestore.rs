//! Texture storage.
//!
//! Owns the loaded [`Texture2D`]s keyed by name. Raylib textures are not
//! `Send`, so the store lives in the world as a non-send resource.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Non-send store of loaded textures keyed by name.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}
