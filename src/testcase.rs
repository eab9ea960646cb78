//! Generated test-case artifacts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::scenario::Obstacle;
use crate::simulator::Trajectory;

/// One executed scenario, suitable for export and replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Obstacles in placement order
    pub obstacles: Vec<Obstacle>,
    /// Flown trajectory; `None` when the simulator failed
    pub trajectory: Option<Arc<Trajectory>>,
    /// Minimum trajectory distance per obstacle, aligned with `obstacles`
    pub distances: Vec<f64>,
}

impl TestCase {
    /// Smallest per-obstacle distance, if any obstacle was measured
    #[must_use]
    pub fn min_distance(&self) -> Option<f64> {
        self.distances.iter().copied().reduce(f64::min)
    }
}

/// Outcome of simulating one scenario state
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Negated minimum distance, or the baseline reward
    pub reward: f64,
    /// Minimum obstacle distance, or the default distance
    pub min_distance: f64,
    /// The executed scenario
    pub test_case: TestCase,
}

impl Evaluation {
    /// True when the simulator produced no usable trajectory
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.test_case.trajectory.is_none()
    }
}
