//! Mission validation logic

use super::error::ValidationError;
use crate::config::schema::MissionSpec;
use crate::geometry::Point3;

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Validate a mission specification
///
/// Checks:
/// - The flight plan is flyable
/// - The region and sampler tunables describe a non-empty placement space
/// - The widening table covers every depth up to `max_obstacles`
/// - Distance bands are ordered
pub fn validate_mission(spec: &MissionSpec) -> Result<(), ValidationError> {
    let flight = &spec.flight;
    if flight.waypoints.len() < 2 {
        return Err(ValidationError::TooFewWaypoints(flight.waypoints.len()));
    }
    let finite = |p: &Point3| p.x.is_finite() && p.y.is_finite() && p.z.is_finite();
    if let Some(i) = flight.waypoints.iter().position(|p| !finite(p)) {
        return Err(ValidationError::NonFiniteWaypoint(i));
    }
    if !positive(flight.speed) {
        return Err(ValidationError::InvalidSpeed(flight.speed));
    }
    if !positive(flight.time_step) {
        return Err(ValidationError::InvalidTimeStep(flight.time_step));
    }
    if flight.max_steps == 0 {
        return Err(ValidationError::InvalidMaxSteps(flight.max_steps));
    }
    if !positive(spec.simulation.timeout_secs) {
        return Err(ValidationError::InvalidTimeout(spec.simulation.timeout_secs));
    }

    let scenario = &spec.scenario;
    let region = scenario.region;
    if !(region.left < region.right) {
        return Err(ValidationError::InvalidRegion(format!(
            "left ({}) must be below right ({})",
            region.left, region.right
        )));
    }
    if !(region.lower < region.upper) {
        return Err(ValidationError::InvalidRegion(format!(
            "lower ({}) must be below upper ({})",
            region.lower, region.upper
        )));
    }
    if scenario.max_obstacles == 0 {
        return Err(ValidationError::InvalidMaxObstacles(0));
    }
    if !positive(scenario.obstacle_height) {
        return Err(ValidationError::InvalidObstacleHeight(scenario.obstacle_height));
    }
    if scenario.subdivisions == 0 {
        return Err(ValidationError::InvalidSubdivisions(0));
    }
    if !(scenario.entry_fraction > 0.0 && scenario.entry_fraction <= 1.0) {
        return Err(ValidationError::InvalidEntryFraction(scenario.entry_fraction));
    }
    if !(scenario.sample_eps > 0.0 && scenario.sample_eps <= 0.5) {
        return Err(ValidationError::InvalidSampleEps(scenario.sample_eps));
    }
    let (low, high) = scenario.free_circle_slack;
    if !(low > 0.0 && low <= high && high <= 1.0) {
        return Err(ValidationError::InvalidSlack(low, high));
    }

    let search = &spec.search;
    let required = scenario.max_obstacles + 1;
    if search.widening_coefficients.len() < required {
        return Err(ValidationError::WideningTableTooShort {
            len: search.widening_coefficients.len(),
            required,
        });
    }
    let mut coefficients = search.widening_coefficients.iter().enumerate();
    if let Some((depth, &value)) = coefficients.find(|&(_, &c)| !positive(c)) {
        return Err(ValidationError::InvalidWideningCoefficient { depth, value });
    }
    if !positive(search.widening_alpha) {
        return Err(ValidationError::InvalidWideningAlpha(search.widening_alpha));
    }
    if !(search.exploration_constant.is_finite() && search.exploration_constant >= 0.0) {
        return Err(ValidationError::InvalidExplorationConstant(search.exploration_constant));
    }
    let (collision, near_miss, marginal) =
        (search.collision_distance, search.near_miss_distance, search.marginal_distance);
    let ordered = collision >= 0.0 && collision < near_miss && near_miss <= marginal;
    if !(ordered && marginal.is_finite()) {
        return Err(ValidationError::InvalidThresholds { collision, near_miss, marginal });
    }

    Ok(())
}
