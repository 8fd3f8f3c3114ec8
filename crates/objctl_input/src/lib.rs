//! Object control input handling
//!
//! This crate turns raw pointer and multi-touch input into rotation steps for
//! one or more objects and dolly steps for the camera.
//!
//! - [`GestureController`] - the drag / pinch / idle state machine
//! - [`ControllerSettings`] - speeds, distance bounds, axis flags and angle limits
//! - [`ViewerControl`] - the seam to the scene that owns rotations and the camera
//! - [`GestureInput`] - feeds winit window events into a controller

mod error;
mod settings;
mod targets;
mod gesture_controller;
pub mod winit_input;

pub use error::ControlError;
pub use settings::{AngleLimit, Axis, ControllerSettings, RotationAxes, TouchDragMode};
pub use targets::{Targets, ViewerControl};
pub use gesture_controller::{GestureController, Mode, Release, SessionState, Zoom};
pub use winit_input::{GestureInput, TouchTracker, TouchUpdate};
