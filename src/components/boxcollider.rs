use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned rectangular collider.
///
/// The world-space AABB is derived on demand from the owning entity's
/// position plus `offset`, so it never goes stale after movement.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size and no offset.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB as (x, y, width, height), for drawing.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlaps_identical_boxes() {
        let a = BoxCollider::new(64.0, 64.0);
        let b = BoxCollider::new(64.0, 64.0);
        let p = Vector2 { x: 10.0, y: 20.0 };
        assert!(a.overlaps(p, &b, p));
    }

    #[test]
    fn no_overlap_when_separated() {
        let a = BoxCollider::new(64.0, 64.0);
        let b = BoxCollider::new(64.0, 64.0);
        let p0 = Vector2 { x: 0.0, y: 0.0 };
        let p1 = Vector2 { x: 65.0, y: 0.0 };
        assert!(!a.overlaps(p0, &b, p1));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoxCollider::new(64.0, 64.0);
        let b = BoxCollider::new(64.0, 64.0);
        let p0 = Vector2 { x: 0.0, y: 0.0 };
        let p1 = Vector2 { x: 64.0, y: 0.0 };
        assert!(!a.overlaps(p0, &b, p1));
    }

    #[test]
    fn aabb_uses_offset() {
        let c = BoxCollider {
            size: Vector2::new(10.0, 10.0),
            offset: Vector2::new(5.0, 5.0),
        };
        let (min, max) = c.aabb(Vector2::zero());
        assert_eq!(min.x, 5.0);
        assert_eq!(min.y, 5.0);
        assert_eq!(max.x, 15.0);
        assert_eq!(max.y, 15.0);
    }
}
