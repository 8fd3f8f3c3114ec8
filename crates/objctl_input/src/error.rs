//! Controller error types
//!
//! Configuration is validated when it is set, so a bad value is reported at
//! the setter instead of producing a controller that silently never zooms.

use std::fmt;

use crate::Axis;

/// Error type for controller configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ControlError {
    /// A speed was zero, negative or not finite
    InvalidSpeed { name: &'static str, value: f32 },
    /// Distance bounds where `min >= max` (or either is not finite)
    InvalidDistanceBounds { min: f32, max: f32 },
    /// Angle limit whose window `(-from, to)` is empty
    InvalidAngleLimit { axis: Axis, from: f32, to: f32 },
    /// Proportional touch divisor was zero, negative or not finite
    InvalidDivisor(f32),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::InvalidSpeed { name, value } => {
                write!(f, "Invalid {}: {} (must be a positive number)", name, value)
            }
            ControlError::InvalidDistanceBounds { min, max } => {
                write!(f, "Invalid distance bounds: min {} must be below max {}", min, max)
            }
            ControlError::InvalidAngleLimit { axis, from, to } => write!(
                f,
                "Invalid {} angle limit: window ({}, {}) is empty",
                axis, -from, to
            ),
            ControlError::InvalidDivisor(value) => {
                write!(f, "Invalid touch drag divisor: {} (must be a positive number)", value)
            }
        }
    }
}

impl std::error::Error for ControlError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_speed_display() {
        let err = ControlError::InvalidSpeed { name: "zoom speed", value: -1.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("zoom speed"));
        assert!(msg.contains("-1"));
    }

    #[test]
    fn test_distance_bounds_display() {
        let err = ControlError::InvalidDistanceBounds { min: 15.0, max: 6.0 };
        let msg = format!("{}", err);
        assert!(msg.contains("min 15"));
        assert!(msg.contains("max 6"));
    }

    #[test]
    fn test_angle_limit_display() {
        let err = ControlError::InvalidAngleLimit { axis: Axis::Vertical, from: -1.0, to: 0.5 };
        let msg = format!("{}", err);
        assert!(msg.contains("vertical"));
        assert!(msg.contains("(1, 0.5)"));
    }

    #[test]
    fn test_error_has_no_source() {
        use std::error::Error;

        let err = ControlError::InvalidDivisor(0.0);
        assert!(err.source().is_none());
    }
}
