//! Controller settings
//!
//! Everything the controller can be tuned with lives in [`ControllerSettings`]
//! so a host can load it from a config file, hand it over at construction, and
//! still adjust single values later through the controller's setters.

use std::f32::consts::PI;
use std::fmt;

use bitflags::bitflags;
use objctl_math::Euler;
use serde::{Serialize, Deserialize};

use crate::ControlError;

/// Rotation axis of a target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Tilt about the horizontal axis (`rotation.x`), driven by vertical drags
    Vertical,
    /// Spin about the vertical axis (`rotation.y`), driven by horizontal drags
    Horizontal,
}

impl Axis {
    /// Flag used in [`RotationAxes`] for this axis
    #[inline]
    pub fn flag(self) -> RotationAxes {
        match self {
            Axis::Vertical => RotationAxes::VERTICAL,
            Axis::Horizontal => RotationAxes::HORIZONTAL,
        }
    }

    /// Angle of `rotation` this axis writes to
    #[inline]
    pub fn angle(self, rotation: Euler) -> f32 {
        match self {
            Axis::Vertical => rotation.x,
            Axis::Horizontal => rotation.y,
        }
    }

    /// Mutable angle of `rotation` this axis writes to
    #[inline]
    pub fn angle_mut(self, rotation: &mut Euler) -> &mut f32 {
        match self {
            Axis::Vertical => &mut rotation.x,
            Axis::Horizontal => &mut rotation.y,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

bitflags! {
    /// Axes that respond to drags
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RotationAxes: u8 {
        /// Vertical drags tilt the target
        const VERTICAL = 1 << 0;
        /// Horizontal drags spin the target
        const HORIZONTAL = 1 << 1;
    }
}

impl Default for RotationAxes {
    fn default() -> Self {
        RotationAxes::HORIZONTAL
    }
}

/// Optional angle window for one axis
///
/// The window is `(-from, to)`: `from` is how far below zero the angle may go
/// and `to` how far above. Both bounds are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AngleLimit {
    /// Whether the window is checked at all
    pub enabled: bool,
    /// Magnitude of the lower bound
    pub from: f32,
    /// Upper bound
    pub to: f32,
}

impl AngleLimit {
    /// An enabled limit with the window `(-from, to)`
    pub fn new(from: f32, to: f32) -> Self {
        Self { enabled: true, from, to }
    }

    /// A limit that admits every angle
    pub fn disabled(from: f32, to: f32) -> Self {
        Self { enabled: false, from, to }
    }

    /// Lower bound of the window
    #[inline]
    pub fn lower(&self) -> f32 {
        -self.from
    }

    /// Upper bound of the window
    #[inline]
    pub fn upper(&self) -> f32 {
        self.to
    }

    /// Whether `angle` may be reached
    ///
    /// Always true while disabled.
    #[inline]
    pub fn admits(&self, angle: f32) -> bool {
        !self.enabled || (self.lower() < angle && angle < self.upper())
    }

    fn validate(&self, axis: Axis) -> Result<(), ControlError> {
        if !self.from.is_finite() || !self.to.is_finite() || self.lower() >= self.upper() {
            return Err(ControlError::InvalidAngleLimit { axis, from: self.from, to: self.to });
        }
        Ok(())
    }
}

/// How single-finger drags are turned into rotation steps
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TouchDragMode {
    /// One step of the touch rotation speed per move, in the drag's direction
    #[default]
    Stepped,
    /// Step equals the pixel delta divided by `divisor`
    Proportional { divisor: f32 },
}

/// Full controller configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Camera distance change per zoom step
    pub zoom_speed: f32,
    /// Closest camera distance
    pub min_distance: f32,
    /// Farthest camera distance
    pub max_distance: f32,
    /// Whether wheel and pinch zoom do anything
    pub zoom_enabled: bool,
    /// Radians per mouse drag step
    pub rotation_speed: f32,
    /// Radians per touch drag step
    pub touch_rotation_speed: f32,
    /// Axes that respond to drags
    pub rotation_axes: RotationAxes,
    /// Window for `rotation.x`
    pub vertical_limit: AngleLimit,
    /// Window for `rotation.y`
    pub horizontal_limit: AngleLimit,
    /// Touch drag stepping
    pub touch_drag: TouchDragMode,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            zoom_speed: 0.5,
            min_distance: 6.0,
            max_distance: 15.0,
            zoom_enabled: true,
            rotation_speed: 0.05,
            touch_rotation_speed: 0.05,
            rotation_axes: RotationAxes::default(),
            vertical_limit: AngleLimit::disabled(PI / 8.0, PI / 8.0),
            horizontal_limit: AngleLimit::disabled(PI / 4.0, PI / 4.0),
            touch_drag: TouchDragMode::default(),
        }
    }
}

impl ControllerSettings {
    /// Angle limit for `axis`
    #[inline]
    pub fn limit(&self, axis: Axis) -> &AngleLimit {
        match axis {
            Axis::Vertical => &self.vertical_limit,
            Axis::Horizontal => &self.horizontal_limit,
        }
    }

    /// Mutable angle limit for `axis`
    #[inline]
    pub fn limit_mut(&mut self, axis: Axis) -> &mut AngleLimit {
        match axis {
            Axis::Vertical => &mut self.vertical_limit,
            Axis::Horizontal => &mut self.horizontal_limit,
        }
    }

    /// Check every value
    ///
    /// Disabled angle limits are not checked; they are validated when enabled.
    pub fn validate(&self) -> Result<(), ControlError> {
        check_speed("zoom speed", self.zoom_speed)?;
        check_speed("rotation speed", self.rotation_speed)?;
        check_speed("touch rotation speed", self.touch_rotation_speed)?;
        check_bounds(self.min_distance, self.max_distance)?;
        for axis in [Axis::Vertical, Axis::Horizontal] {
            let limit = self.limit(axis);
            if limit.enabled {
                limit.validate(axis)?;
            }
        }
        if let TouchDragMode::Proportional { divisor } = self.touch_drag {
            check_divisor(divisor)?;
        }
        Ok(())
    }
}

pub(crate) fn check_speed(name: &'static str, value: f32) -> Result<(), ControlError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ControlError::InvalidSpeed { name, value })
    }
}

pub(crate) fn check_bounds(min: f32, max: f32) -> Result<(), ControlError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(ControlError::InvalidDistanceBounds { min, max })
    }
}

pub(crate) fn check_divisor(divisor: f32) -> Result<(), ControlError> {
    if divisor.is_finite() && divisor > 0.0 {
        Ok(())
    } else {
        Err(ControlError::InvalidDivisor(divisor))
    }
}

pub(crate) fn check_limit(axis: Axis, limit: &AngleLimit) -> Result<(), ControlError> {
    limit.validate(axis)
}
