//! Engine systems.
//!
//! This module groups all ECS systems that advance the simulation and draw
//! it. The tick runs them in a fixed order: patrol step, movement,
//! boundaries, collision, render.
//!
//! Submodules overview
//! - [`boundaries`] – clamp positions against patrol walls and map edges
//! - [`collision`] – overlap queries and collision event emission
//! - [`movement`] – integrate positions and decay velocities by friction
//! - [`patrol`] – issue the per-frame directional impulse
//! - [`render`] – draw NPCs and debug overlays using Raylib
//! - [`time`] – update simulation time and delta

pub mod boundaries;
pub mod collision;
pub mod movement;
pub mod patrol;
pub mod render;
pub mod time;
