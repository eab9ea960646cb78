//! Placement geometry for obstacle scenarios.
//!
//! Obstacles are oriented rectangles in the horizontal plane. Overlap
//! between them is tested conservatively through circle coverings, and
//! new rectangles are sampled inside the largest circle that clears every
//! covering circle already placed.

mod point;
mod sampling;
mod shapes;
mod vector;

pub use point::Point3;
pub use sampling::{
    free_radius, largest_free_circle, nonintersecting_rectangle_near, sample_rectangle_in_circle,
    SamplingParams, MAX_ROTATION, SHRINK_FACTOR,
};
pub use shapes::{Bounds, Circle, Rect};
pub use vector::Vec2;
