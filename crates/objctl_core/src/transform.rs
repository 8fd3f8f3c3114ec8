//! Object transform (position, rotation)

use objctl_math::{Euler, Vec3};

/// Position and per-axis rotation of an object
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Rotation in radians
    pub rotation: Euler,
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Euler::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let t = Transform::identity();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Euler::IDENTITY);
    }

    #[test]
    fn test_from_position() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.position.z, 3.0);
        assert_eq!(t.rotation, Euler::IDENTITY);
    }
}
