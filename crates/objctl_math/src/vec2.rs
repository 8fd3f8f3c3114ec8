//! 2D Vector type

/// 2D Vector with x, y components
///
/// Used for device coordinates (pixels, y growing downwards) and for
/// per-axis separations between touch points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new Vec2
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Direction of each component: -1, 0 or 1
    ///
    /// Unlike `f32::signum`, zero maps to zero so a still axis produces no step.
    #[inline]
    pub fn direction(self) -> Self {
        Self::new(direction(self.x), direction(self.y))
    }

    /// Per-axis absolute separation between two points
    #[inline]
    pub fn separation(self, other: Self) -> Self {
        (self - other).abs()
    }

    /// True when both components are strictly greater than those of `other`
    #[inline]
    pub fn all_gt(self, other: Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// True when both components are strictly less than those of `other`
    #[inline]
    pub fn all_lt(self, other: Self) -> bool {
        self.x < other.x && self.y < other.y
    }
}

#[inline]
fn direction(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// Operator overloads

impl std::ops::Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub() {
        let a = Vec2::new(5.0, 6.0);
        let b = Vec2::new(1.0, 8.0);
        assert_eq!(a - b, Vec2::new(4.0, -2.0));
    }

    #[test]
    fn test_direction() {
        let v = Vec2::new(3.0, -0.25);
        assert_eq!(v.direction(), Vec2::new(1.0, -1.0));

        // Zero stays zero
        let still = Vec2::new(0.0, 7.0);
        assert_eq!(still.direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_separation_is_symmetric() {
        let a = Vec2::new(10.0, 100.0);
        let b = Vec2::new(50.0, 60.0);
        assert_eq!(a.separation(b), Vec2::new(40.0, 40.0));
        assert_eq!(b.separation(a), Vec2::new(40.0, 40.0));
    }

    #[test]
    fn test_all_gt_all_lt() {
        let base = Vec2::new(40.0, 40.0);
        assert!(Vec2::new(60.0, 55.0).all_gt(base));
        assert!(!Vec2::new(60.0, 30.0).all_gt(base));
        assert!(Vec2::new(20.0, 30.0).all_lt(base));
        assert!(!Vec2::new(40.0, 30.0).all_lt(base));
    }

    #[test]
    fn test_scale() {
        let v = Vec2::new(-1.0, 1.0);
        assert_eq!(v * 0.05, Vec2::new(-0.05, 0.05));
        assert_eq!(Vec2::new(30.0, -15.0) / 10.0, Vec2::new(3.0, -1.5));
    }

    #[test]
    fn test_from_f64_tuple() {
        let v: Vec2 = (1.5f64, -2.0f64).into();
        assert_eq!(v, Vec2::new(1.5, -2.0));
    }
}
