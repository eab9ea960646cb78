//! Validation error types
//!
//! Defines all validation error variants for mission specifications.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Flight plan needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("Waypoint {0} has a non-finite coordinate")]
    NonFiniteWaypoint(usize),

    #[error("Invalid speed: {0} (must be > 0.0)")]
    InvalidSpeed(f64),

    #[error("Invalid time step: {0} (must be > 0.0)")]
    InvalidTimeStep(f64),

    #[error("Invalid max steps: {0} (must be > 0)")]
    InvalidMaxSteps(usize),

    #[error("Invalid simulation timeout: {0}s (must be > 0.0)")]
    InvalidTimeout(f64),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid max obstacles: {0} (must be > 0)")]
    InvalidMaxObstacles(usize),

    #[error("Invalid obstacle height: {0} (must be > 0.0)")]
    InvalidObstacleHeight(f64),

    #[error("Invalid subdivisions: {0} (must be > 0)")]
    InvalidSubdivisions(usize),

    #[error("Invalid entry fraction: {0} (must be in (0.0, 1.0])")]
    InvalidEntryFraction(f64),

    #[error("Invalid sample epsilon: {0} (must be in (0.0, 0.5])")]
    InvalidSampleEps(f64),

    #[error("Invalid free circle slack: [{0}, {1}] (must satisfy 0 < low <= high <= 1)")]
    InvalidSlack(f64, f64),

    #[error("Widening table has {len} coefficients, need at least {required} for max_obstacles")]
    WideningTableTooShort { len: usize, required: usize },

    #[error("Invalid widening coefficient at depth {depth}: {value} (must be > 0.0)")]
    InvalidWideningCoefficient { depth: usize, value: f64 },

    #[error("Invalid widening alpha: {0} (must be > 0.0)")]
    InvalidWideningAlpha(f64),

    #[error("Invalid exploration constant: {0} (must be >= 0.0)")]
    InvalidExplorationConstant(f64),

    #[error(
        "Invalid distance thresholds: need 0 <= collision ({collision}) \
         < near miss ({near_miss}) <= marginal ({marginal})"
    )]
    InvalidThresholds { collision: f64, near_miss: f64, marginal: f64 },
}
