//! Oriented rectangles, circles and axis-aligned placement bounds.
//!
//! Rotations are counter-clockwise degrees about the shape's own center.
//! Rectangle/rectangle overlap is never tested exactly: each rectangle is
//! covered by a grid of enclosing circles and overlap is a distance check.

use serde::{Deserialize, Serialize};

use super::vector::Vec2;

/// A circle in the horizontal plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point
    pub center: Vec2,
    /// Radius (non-negative for valid circles)
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle
    #[must_use]
    pub const fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// True if the interiors of the two circles overlap.
    /// Touching circles do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}

/// Axis-aligned region limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum x
    pub left: f64,
    /// Maximum x
    pub right: f64,
    /// Minimum y
    pub lower: f64,
    /// Maximum y
    pub upper: f64,
}

impl Bounds {
    /// Creates new bounds
    #[must_use]
    pub const fn new(left: f64, right: f64, lower: f64, upper: f64) -> Self {
        Self { left, right, lower, upper }
    }

    /// Vertical extent
    #[must_use]
    pub fn height(&self) -> f64 {
        self.upper - self.lower
    }

    /// True if `point` lies strictly inside the bounds
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.left < point.x && point.x < self.right && self.lower < point.y && point.y < self.upper
    }

    /// Signed distance from `point` to the nearest edge (negative outside)
    #[must_use]
    pub fn distance_to_edges(&self, point: Vec2) -> f64 {
        (self.upper - point.y)
            .min(point.y - self.lower)
            .min(point.x - self.left)
            .min(self.right - point.x)
    }
}

/// An oriented rectangle: center, footprint and counter-clockwise rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Center point
    pub center: Vec2,
    /// Extent along the rotated x axis
    pub length: f64,
    /// Extent along the rotated y axis
    pub width: f64,
    /// Counter-clockwise rotation in degrees
    pub rotation: f64,
}

impl Rect {
    /// Creates a new oriented rectangle
    #[must_use]
    pub const fn new(center: Vec2, length: f64, width: f64, rotation: f64) -> Self {
        Self { center, length, width, rotation }
    }

    /// Half of the diagonal, the radius of the smallest enclosing circle
    #[must_use]
    pub fn half_diagonal(&self) -> f64 {
        (self.length / 2.0).hypot(self.width / 2.0)
    }

    /// The smallest circle enclosing the rectangle
    #[must_use]
    pub fn enclosing_circle(&self) -> Circle {
        Circle::new(self.center, self.half_diagonal())
    }

    /// Split into `subdivisions × subdivisions` equal sub-rectangles.
    ///
    /// Sub-rectangle centers are laid out in the unrotated frame and then
    /// rotated about this rectangle's center, so every piece keeps the
    /// parent's orientation.
    #[must_use]
    pub fn subdivide(&self, subdivisions: usize) -> Vec<Self> {
        if subdivisions == 0 {
            return Vec::new();
        }
        let n = subdivisions as f64;
        let sub_length = self.length / n;
        let sub_width = self.width / n;
        let x_min = -self.length / 2.0;
        let y_min = -self.width / 2.0;

        let mut pieces = Vec::with_capacity(subdivisions * subdivisions);
        for i in 0..subdivisions {
            for j in 0..subdivisions {
                let local = Vec2::new(
                    x_min + (i as f64 + 0.5) * sub_length,
                    y_min + (j as f64 + 0.5) * sub_width,
                );
                pieces.push(Self::new(
                    self.center + local.rotated(self.rotation),
                    sub_length,
                    sub_width,
                    self.rotation,
                ));
            }
        }
        pieces
    }

    /// Cover the rectangle with `subdivisions²` circles, one enclosing
    /// circle per grid cell.
    #[must_use]
    pub fn circle_cover(&self, subdivisions: usize) -> Vec<Circle> {
        self.subdivide(subdivisions).iter().map(Self::enclosing_circle).collect()
    }

    /// Express a world point in the rectangle's own unrotated frame
    #[must_use]
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        (point - self.center).rotated(-self.rotation)
    }

    /// The point of the rectangle (boundary or interior) nearest to `point`
    #[must_use]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let local = self.to_local(point);
        let clamped = Vec2::new(
            local.x.clamp(-self.length / 2.0, self.length / 2.0),
            local.y.clamp(-self.width / 2.0, self.width / 2.0),
        );
        self.center + clamped.rotated(self.rotation)
    }

    /// Distance from `point` to the rectangle; zero inside
    #[must_use]
    pub fn distance_to(&self, point: Vec2) -> f64 {
        let local = self.to_local(point);
        let dx = (local.x.abs() - self.length / 2.0).max(0.0);
        let dy = (local.y.abs() - self.width / 2.0).max(0.0);
        dx.hypot(dy)
    }

    /// World-space corners, counter-clockwise from the local (-x, -y) corner
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        let hl = self.length / 2.0;
        let hw = self.width / 2.0;
        [(-hl, -hw), (hl, -hw), (hl, hw), (-hl, hw)]
            .map(|(x, y)| self.center + Vec2::new(x, y).rotated(self.rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_subdivide_axis_aligned_grid() {
        let rect = Rect::new(Vec2::new(10.0, 30.0), 40.0, 40.0, 0.0);
        let pieces = rect.subdivide(4);
        assert_eq!(pieces.len(), 16);
        assert_eq!(pieces[0].center, Vec2::new(-5.0, 15.0));
        assert_eq!(pieces[15].center, Vec2::new(25.0, 45.0));
        for p in &pieces {
            assert_abs_diff_eq!(p.length, 10.0);
            assert_abs_diff_eq!(p.width, 10.0);
        }
    }

    #[test]
    fn test_subdivide_preserves_rotation() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), 4.0, 2.0, 90.0);
        let pieces = rect.subdivide(2);
        // The local (-1, -0.5) cell lands at (0.5, -1) after a quarter turn.
        assert_abs_diff_eq!(pieces[0].center.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(pieces[0].center.y, -1.0, epsilon = 1e-12);
        assert!(pieces.iter().all(|p| p.rotation == 90.0));
    }

    #[test]
    fn test_subdivide_zero_is_empty() {
        let rect = Rect::new(Vec2::ZERO, 1.0, 1.0, 0.0);
        assert!(rect.subdivide(0).is_empty());
    }

    #[test]
    fn test_circle_cover_contains_corners() {
        let rect = Rect::new(Vec2::new(3.0, -2.0), 6.0, 2.0, 37.0);
        let cover = rect.circle_cover(4);
        assert_eq!(cover.len(), 16);
        for corner in rect.corners() {
            assert!(cover.iter().any(|c| c.center.distance(corner) <= c.radius + 1e-9));
        }
    }

    #[test]
    fn test_circle_cover_stays_inside_enclosing_circle() {
        let rect = Rect::new(Vec2::new(1.0, 1.0), 8.0, 3.0, 15.0);
        let outer = rect.enclosing_circle();
        for c in rect.circle_cover(4) {
            assert!(c.center.distance(outer.center) + c.radius <= outer.radius + 1e-9);
        }
    }

    #[test]
    fn test_distance_to_rotated_rectangle() {
        let rect = Rect::new(Vec2::ZERO, 4.0, 2.0, 90.0);
        // After rotation the long side runs along y; x half-extent is 1.
        assert_abs_diff_eq!(rect.distance_to(Vec2::new(3.0, 0.0)), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rect.distance_to(Vec2::new(0.0, 5.0)), 3.0, epsilon = 1e-12);
        assert_eq!(rect.distance_to(Vec2::new(0.5, 1.5)), 0.0);
    }

    #[test]
    fn test_closest_point_matches_distance() {
        let rect = Rect::new(Vec2::new(2.0, 2.0), 3.0, 1.0, 30.0);
        let p = Vec2::new(7.0, -1.0);
        let q = rect.closest_point(p);
        assert_abs_diff_eq!(q.distance(p), rect.distance_to(p), epsilon = 1e-9);
    }

    #[test]
    fn test_bounds_distance_and_containment() {
        let b = Bounds::new(-40.0, 30.0, 10.0, 40.0);
        assert_abs_diff_eq!(b.distance_to_edges(Vec2::new(0.0, 12.0)), 2.0);
        assert!(b.contains(Vec2::new(0.0, 12.0)));
        assert!(!b.contains(Vec2::new(30.0, 12.0)));
        assert!(b.distance_to_edges(Vec2::new(50.0, 20.0)) < 0.0);
    }

    #[test]
    fn test_circle_touching_does_not_overlap() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(2.0, 0.0), 1.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Circle::new(Vec2::new(1.5, 0.0), 1.0)));
    }
}
