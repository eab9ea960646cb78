//! Plain 2D vector used by the placement geometry.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A point or displacement in the horizontal plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// East coordinate
    pub x: f64,
    /// North coordinate
    pub y: f64,
}

impl Vec2 {
    /// The origin
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Unit vector along +x, the reference axis for obstacle rotations
    pub const X_AXIS: Self = Self { x: 1.0, y: 0.0 };

    /// Creates a new vector
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Point halfway between `self` and `other`
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) / 2.0
    }

    /// Unit vector with the same direction, or `None` for the zero vector
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self / len)
        } else {
            None
        }
    }

    /// Left-hand perpendicular (counter-clockwise quarter turn)
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Counter-clockwise rotation by `degrees` about the origin
    #[must_use]
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Unsigned angle between this vector and +x, in degrees within `[0, 180]`.
    ///
    /// `None` for the zero vector, which has no direction.
    #[must_use]
    pub fn angle_to_x_axis(self) -> Option<f64> {
        let unit = self.normalized()?;
        Some(unit.dot(Self::X_AXIS).clamp(-1.0, 1.0).acos().to_degrees())
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_rotation_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated(90.0);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_to_x_axis_covers_half_turn() {
        assert_abs_diff_eq!(Vec2::new(3.0, 0.0).angle_to_x_axis().unwrap(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Vec2::new(0.0, -2.0).angle_to_x_axis().unwrap(), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Vec2::new(-1.0, 1.0).angle_to_x_axis().unwrap(), 135.0, epsilon = 1e-9);
        assert!(Vec2::ZERO.angle_to_x_axis().is_none());
    }

    #[test]
    fn test_midpoint() {
        let m = Vec2::new(0.0, 0.0).midpoint(Vec2::new(4.0, -2.0));
        assert_eq!(m, Vec2::new(2.0, -1.0));
    }

    proptest! {
        #[test]
        fn prop_normalized_is_unit(x in -1e3f64..1e3, y in -1e3f64..1e3) {
            let v = Vec2::new(x, y);
            if let Some(unit) = v.normalized() {
                prop_assert!((unit.length() - 1.0).abs() < 1e-9);
            } else {
                prop_assert_eq!(v.length(), 0.0);
            }
        }

        #[test]
        fn prop_rotation_preserves_length(
            x in -1e3f64..1e3,
            y in -1e3f64..1e3,
            deg in -360.0f64..360.0,
        ) {
            let v = Vec2::new(x, y);
            prop_assert!((v.rotated(deg).length() - v.length()).abs() < 1e-6);
        }
    }
}
