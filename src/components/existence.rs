//! Existence flag component.
//!
//! Entities carry an explicit liveness flag that collision queries honor:
//! an entity whose flag is cleared cannot be touched, regardless of where
//! its box sits. Clearing the flag is how gameplay marks an entity dead
//! before the owning container despawns it.

use bevy_ecs::prelude::Component;

/// Liveness flag checked by [`touches`](crate::systems::collision::touches).
#[derive(Component, Clone, Copy, Debug)]
pub struct Existence {
    pub exists: bool,
}

impl Default for Existence {
    fn default() -> Self {
        Self { exists: true }
    }
}
