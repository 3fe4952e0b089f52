//! ECS resources.
//!
//! Shared world state that is not tied to a single entity.
//!
//! Submodules overview:
//! - [`camera2d`] – shared 2D camera parameters for rendering
//! - [`debugmode`] – marker resource enabling debug overlays
//! - [`gameconfig`] – INI-backed configuration with safe defaults
//! - [`mapbounds`] – world-space map extent used for clamping
//! - [`screensize`] – current framebuffer dimensions
//! - [`texturestore`] – non-send store of loaded textures
//! - [`worldtime`] – simulation clock (elapsed, delta, frame counter)

pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod mapbounds;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
