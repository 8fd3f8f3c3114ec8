//! Viewer camera
//!
//! The camera looks down -z at the origin; gestures only ever move it along z.

use objctl_math::Vec3;

/// Camera whose z coordinate is the dolly distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera 10 units in front of the origin
    pub fn new() -> Self {
        Self::at_distance(10.0)
    }

    /// Camera on the z axis at `distance`
    pub fn at_distance(distance: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
        }
    }

    /// Current dolly distance
    #[inline]
    pub fn distance(&self) -> f32 {
        self.position.z
    }

    /// Move along z to `distance`
    #[inline]
    pub fn set_distance(&mut self, distance: f32) {
        self.position.z = distance;
    }
}
