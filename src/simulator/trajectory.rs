//! Flown trajectories and obstacle clearance.

use serde::{Deserialize, Serialize};

use super::error::SimulationError;
use crate::geometry::{Point3, Vec2};
use crate::scenario::Obstacle;

/// Ordered positions recorded during one simulated flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    positions: Vec<Point3>,
}

impl Trajectory {
    /// Wraps recorded positions
    #[must_use]
    pub fn new(positions: Vec<Point3>) -> Self {
        Self { positions }
    }

    /// Recorded positions in flight order
    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Number of recorded positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Horizontal projection of the positions, in flight order
    pub fn points_2d(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.positions.iter().map(|p| p.xy())
    }

    /// The horizontal trajectory point nearest to `point` and its distance
    #[must_use]
    pub fn nearest_point(&self, point: Vec2) -> Option<(Vec2, f64)> {
        self.points_2d()
            .map(|p| (p, p.distance(point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Smallest distance between any recorded position and any of `obstacles`.
    ///
    /// `f64::INFINITY` when either side is empty.
    #[must_use]
    pub fn min_distance_to(&self, obstacles: &[Obstacle]) -> f64 {
        self.positions
            .iter()
            .flat_map(|&p| obstacles.iter().map(move |ob| ob.distance_to(p)))
            .fold(f64::INFINITY, f64::min)
    }

    /// Reject trajectories the search cannot score
    pub fn validate(self) -> Result<Self, SimulationError> {
        if self.positions.is_empty() {
            return Err(SimulationError::EmptyTrajectory);
        }
        if let Some(i) = self
            .positions
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        {
            return Err(SimulationError::InvalidTrajectory(format!(
                "non-finite position at index {i}"
            )));
        }
        Ok(self)
    }
}
