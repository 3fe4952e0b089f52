//! Event types.
//!
//! Submodules overview:
//! - [`collision`] – contact events triggered by the collision detector

pub mod collision;
