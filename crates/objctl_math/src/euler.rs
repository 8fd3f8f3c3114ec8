//! Euler angle rotation

/// Rotation as independent per-axis angles in radians
///
/// `x` turns about the horizontal axis (tilt), `y` about the vertical axis
/// (spin). `z` is carried along for completeness; gestures never write it.
/// Angles are unbounded and never wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Euler {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a rotation from per-axis angles
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotation with only the y angle set
    #[inline]
    pub const fn from_y(y: f32) -> Self {
        Self { x: 0.0, y, z: 0.0 }
    }

    /// Angles expressed in degrees, handy for logging
    pub fn to_degrees(self) -> [f32; 3] {
        [self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees()]
    }
}
