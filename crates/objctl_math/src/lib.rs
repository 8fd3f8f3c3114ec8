//! Math types for objctl
//!
//! This crate provides the small value types shared by the input and scene crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector used for pointer coordinates and pinch spreads
//! - [`Vec3`] - 3D position
//! - [`Euler`] - Per-axis rotation angles in radians

mod vec2;
mod vec3;
mod euler;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use euler::Euler;
