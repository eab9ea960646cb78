//! Simulation error types

use std::time::Duration;
use thiserror::Error;

/// Failure of a single simulator run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Simulation exceeded its deadline of {0:?}")]
    Timeout(Duration),

    #[error("Drone did not complete the mission within {steps} steps")]
    Diverged { steps: usize },

    #[error("Simulator returned an empty trajectory")]
    EmptyTrajectory,

    #[error("Invalid trajectory: {0}")]
    InvalidTrajectory(String),

    #[error("Simulator crashed: {0}")]
    Crashed(String),
}
