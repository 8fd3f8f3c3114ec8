//! Scene types for objctl
//!
//! The gesture controller never owns what it moves. This crate provides the
//! owning side:
//!
//! - [`Transform`] - Position and rotation of an object
//! - [`Object`] - A named rotatable object
//! - [`Camera`] - Camera whose z position is the dolly distance
//! - [`Scene`] - Objects plus camera, driven through [`objctl_input::ViewerControl`]
//! - [`ObjectKey`] - Generational key to an object in the scene

mod transform;
mod object;
mod camera;
mod scene;

pub use transform::Transform;
pub use object::Object;
pub use camera::Camera;
pub use scene::{ObjectKey, Scene};

// Re-export math types used in the public API
pub use objctl_math::{Euler, Vec3};
