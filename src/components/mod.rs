//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap queries
//! - [`existence`] – liveness flag honored by collision queries
//! - [`mapposition`] – world-space position for an entity
//! - [`npc`] – NPC gameplay stats and rendering flags
//! - [`patrol`] – patrol path, facing direction and boundary rectangle
//! - [`rigidbody`] – kinematic body storing velocity and friction
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod boxcollider;
pub mod existence;
pub mod mapposition;
pub mod npc;
pub mod patrol;
pub mod rigidbody;
pub mod sprite;
pub mod zindex;
