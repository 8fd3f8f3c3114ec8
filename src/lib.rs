//! objctl - gesture driven object viewer controls
//!
//! Library side of the inspector binary: configuration loading and the
//! window system. The gesture state machine itself lives in `objctl_input`.

pub mod config;
pub mod systems;
