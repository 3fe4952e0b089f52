//! Collision event type and a simple observer.
//!
//! The collision detector triggers [`CollisionEvent`] whenever two existing
//! entities overlap. Observers can subscribe to this event to react in a
//! decoupled manner (damage, infection, sound, despawn, etc.). The included
//! [`collision_observer`] only logs the contact; replace it with
//! game-specific rules as they appear.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

/// Event fired when two existing entities with BoxCollider overlap.
///
/// The two fields, [`CollisionEvent::a`] and [`CollisionEvent::b`], are the
/// entity IDs of the participants. No ordering guarantees are provided.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Global observer that logs each contact.
pub fn collision_observer(trigger: On<CollisionEvent>) {
    let event = trigger.event();
    log::debug!("Contact between {:?} and {:?}", event.a, event.b);
}
