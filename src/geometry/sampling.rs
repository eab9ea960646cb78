//! Randomized placement primitives.
//!
//! Every sampler takes the random source explicitly so that a seeded
//! search is reproducible end to end.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shapes::{Bounds, Circle, Rect};
use super::vector::Vec2;

/// Scale applied to sampled rectangles so they never touch their circle
pub const SHRINK_FACTOR: f64 = 0.999;

/// Upper end of the uniform rotation draw, in degrees
pub const MAX_ROTATION: f64 = 90.0;

/// Tunables shared by the placement samplers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    /// Grid resolution used when covering rectangles with circles
    pub subdivisions: usize,
    /// Half-length is drawn from `[eps·r, (1-eps)·r]`
    pub eps: f64,
    /// Uniform range for the factor applied to a free circle's radius
    pub slack: (f64, f64),
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { subdivisions: 4, eps: 0.1, slack: (0.5, 0.9) }
    }
}

/// Sample a rectangle centered in `circle` whose diagonal spans the
/// circle's diameter before the [`SHRINK_FACTOR`] is applied.
///
/// Returns `None` for a non-positive (or NaN) radius.
pub fn sample_rectangle_in_circle(circle: &Circle, eps: f64, rng: &mut impl Rng) -> Option<Rect> {
    let radius = circle.radius;
    if !(radius > 0.0) || !radius.is_finite() {
        return None;
    }
    let lo = eps.min(1.0 - eps) * radius;
    let hi = eps.max(1.0 - eps) * radius;
    let half_length = rng.random_range(lo..=hi);
    let half_width = (radius * radius - half_length * half_length).max(0.0).sqrt();
    let rotation = rng.random_range(0.0..=MAX_ROTATION);

    Some(Rect::new(
        circle.center,
        SHRINK_FACTOR * half_length * 2.0,
        SHRINK_FACTOR * half_width * 2.0,
        rotation,
    ))
}

/// Radius of the largest circle at `center` that stays within `bounds`
/// and does not overlap any of `others`. May be zero or negative.
#[must_use]
pub fn free_radius(center: Vec2, bounds: &Bounds, others: &[Circle]) -> f64 {
    others
        .iter()
        .map(|c| center.distance(c.center) - c.radius)
        .fold(bounds.distance_to_edges(center), f64::min)
}

/// The largest free circle at `center`, shrunk by a random factor drawn
/// from `slack` to leave room for the rectangle sampled inside it.
///
/// `None` when no positive radius exists, e.g. when `center` already lies
/// inside one of `others`.
pub fn largest_free_circle(
    center: Vec2,
    bounds: &Bounds,
    others: &[Circle],
    slack: (f64, f64),
    rng: &mut impl Rng,
) -> Option<Circle> {
    let radius = free_radius(center, bounds, others);
    if !(radius > 0.0) {
        return None;
    }
    let coeff = rng.random_range(slack.0.min(slack.1)..=slack.0.max(slack.1));
    Some(Circle::new(center, coeff * radius))
}

/// Sample a rectangle near `center` whose circle covering cannot overlap
/// the circle coverings of `others`.
pub fn nonintersecting_rectangle_near(
    center: Vec2,
    bounds: &Bounds,
    others: &[Rect],
    params: &SamplingParams,
    rng: &mut impl Rng,
) -> Option<Rect> {
    let circles: Vec<Circle> =
        others.iter().flat_map(|r| r.circle_cover(params.subdivisions)).collect();
    let circle = largest_free_circle(center, bounds, &circles, params.slack, rng)?;
    sample_rectangle_in_circle(&circle, params.eps, rng)
}
