//! Placement error types

use thiserror::Error;

/// Reasons a scenario transition could not produce a new state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("Scenario has no obstacle to modify")]
    EmptyScenario,

    #[error("Scenario has no trajectory to place against (not simulated yet)")]
    MissingTrajectory,

    #[error("No trajectory point falls inside the region of interest")]
    NoCandidatePoint,

    #[error("No free space around the chosen trajectory point")]
    NoFreeSpace,

    #[error("Every resampled state duplicated a tried sibling ({attempts} attempts)")]
    DuplicatesExhausted { attempts: usize },
}
