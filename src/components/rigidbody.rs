//! Kinematic body component.
//!
//! The [`RigidBody`] component stores velocity and the per-instance friction
//! scalar. Velocity accumulates directional impulses from the patrol logic
//! and decays by `friction` every frame, so an NPC coasts to a stop between
//! impulses.
//!
//! Friction here is not a physical drag coefficient: the movement system uses
//! it both to scale displacement (`position += velocity * friction`) and to
//! decay velocity (`velocity *= friction`). It is sampled once at spawn time
//! in `[0, MAX_NPC_FRICTION)` and never changes for the lifetime of the
//! entity.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Upper bound (exclusive) for the sampled per-NPC friction.
pub const MAX_NPC_FRICTION: f32 = 0.2;

/// Kinematic body storing velocity and the instance's friction scalar.
///
/// Intended to be written by the patrol/boundary systems and consumed by the
/// movement system to update [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per frame (pre-friction).
    pub velocity: Vector2,
    /// Displacement scale and per-frame velocity decay factor, in
    /// `[0, MAX_NPC_FRICTION)`. Constant after construction.
    pub friction: f32,
}

impl RigidBody {
    /// Create a RigidBody at rest with the given friction.
    pub fn with_friction(friction: f32) -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            friction,
        }
    }

    /// Create a RigidBody at rest with a freshly sampled friction in
    /// `[0, MAX_NPC_FRICTION)`.
    pub fn sampled() -> Self {
        Self::with_friction(fastrand::f32() * MAX_NPC_FRICTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_friction_starts_at_rest() {
        let rb = RigidBody::with_friction(0.1);
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
        assert_eq!(rb.friction, 0.1);
    }

    #[test]
    fn sampled_friction_is_bounded() {
        for _ in 0..100 {
            let rb = RigidBody::sampled();
            assert!(rb.friction >= 0.0);
            assert!(rb.friction < MAX_NPC_FRICTION);
        }
    }
}
