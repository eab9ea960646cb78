//! Box obstacles placed into a mission.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point3, Rect, Vec2};

/// Obstacle placement: center and counter-clockwise rotation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Center x
    pub x: f64,
    /// Center y
    pub y: f64,
    /// Base altitude
    pub z: f64,
    /// Rotation about the center, degrees counter-clockwise
    pub r: f64,
}

/// Obstacle dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Length along the rotated x axis
    pub l: f64,
    /// Width along the rotated y axis
    pub w: f64,
    /// Height above the base
    pub h: f64,
}

/// An oriented box obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Footprint and height
    pub size: Size,
    /// Center and rotation
    pub position: Position,
}

/// Bit-exact identity of an obstacle's geometry, used for set comparisons
pub(crate) type ObstacleKey = [u64; 7];

impl Obstacle {
    /// Creates a new obstacle
    #[must_use]
    pub const fn new(size: Size, position: Position) -> Self {
        Self { size, position }
    }

    /// Ground-standing obstacle with the footprint of `rect`
    #[must_use]
    pub fn from_footprint(rect: &Rect, height: f64) -> Self {
        Self::new(
            Size { l: rect.length, w: rect.width, h: height },
            Position { x: rect.center.x, y: rect.center.y, z: 0.0, r: rect.rotation },
        )
    }

    /// Horizontal center
    #[must_use]
    pub const fn center(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y)
    }

    /// The oriented rectangle the obstacle occupies on the ground
    #[must_use]
    pub fn footprint(&self) -> Rect {
        Rect::new(self.center(), self.size.l, self.size.w, self.position.r)
    }

    /// Euclidean distance from `point` to the obstacle's box; zero inside
    #[must_use]
    pub fn distance_to(&self, point: Point3) -> f64 {
        let horizontal = self.footprint().distance_to(point.xy());
        let base = self.position.z;
        let top = base + self.size.h;
        let vertical = (base - point.z).max(point.z - top).max(0.0);
        horizontal.hypot(vertical)
    }

    pub(crate) fn key(&self) -> ObstacleKey {
        let Size { l, w, h } = self.size;
        let Position { x, y, z, r } = self.position;
        [x, y, z, r, l, w, h].map(f64::to_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_box(x: f64, y: f64) -> Obstacle {
        Obstacle::new(Size { l: 2.0, w: 2.0, h: 25.0 }, Position { x, y, z: 0.0, r: 0.0 })
    }

    #[test]
    fn test_distance_beside_obstacle() {
        let ob = unit_box(0.0, 0.0);
        assert_abs_diff_eq!(ob.distance_to(Point3::new(4.0, 0.0, 5.0)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_above_obstacle() {
        let ob = unit_box(0.0, 0.0);
        assert_abs_diff_eq!(ob.distance_to(Point3::new(0.0, 0.0, 30.0)), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_inside_is_zero() {
        assert_eq!(unit_box(1.0, 1.0).distance_to(Point3::new(1.5, 0.5, 3.0)), 0.0);
    }

    #[test]
    fn test_footprint_roundtrip() {
        let rect = Rect::new(Vec2::new(-3.0, 12.0), 5.0, 1.5, 42.0);
        let ob = Obstacle::from_footprint(&rect, 25.0);
        assert_eq!(ob.footprint(), rect);
        assert_eq!(ob.size.h, 25.0);
    }

    #[test]
    fn test_key_distinguishes_rotation() {
        let a = unit_box(0.0, 0.0);
        let mut b = a;
        b.position.r = 10.0;
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), unit_box(0.0, 0.0).key());
    }
}
