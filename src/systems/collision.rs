//! Overlap queries and collision event emission.
//!
//! [`touches`] is the pure query the gameplay contract is written against:
//! an entity touches another iff the other still exists and their boxes
//! intersect. [`collision_detector`] runs it over every entity pair and
//! triggers a [`CollisionEvent`] for each contact so observers can react in
//! a decoupled manner.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::existence::Existence;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

/// True iff `other` exists and the two AABBs intersect. No side effects.
pub fn touches(
    position: &MapPosition,
    collider: &BoxCollider,
    other_position: &MapPosition,
    other_collider: &BoxCollider,
    other_existence: &Existence,
) -> bool {
    if !other_existence.exists {
        return false;
    }
    collider.overlaps(position.pos, other_collider, other_position.pos)
}

/// Check all entity pairs and trigger a [`CollisionEvent`] per contact.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, &Existence)>,
    mut commands: Commands,
) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();

    for [(entity_a, position_a, collider_a, existence_a), (entity_b, position_b, collider_b, existence_b)] in
        query.iter_combinations()
    {
        // Both directions honor the liveness flag.
        if touches(position_a, collider_a, position_b, collider_b, existence_b)
            && existence_a.exists
        {
            pairs.push((entity_a, entity_b));
        }
    }

    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}
