//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_mission, MissionSpec, ValidateArgs};

/// Format flight information as a string
pub fn format_flight_info(spec: &MissionSpec) -> String {
    let flight = &spec.flight;
    let mut lines = vec![format!("  Waypoints: {}", flight.waypoints.len())];
    if let (Some(first), Some(last)) = (flight.waypoints.first(), flight.waypoints.last()) {
        lines.push(format!(
            "  From ({:.1}, {:.1}, {:.1}) to ({:.1}, {:.1}, {:.1})",
            first.x, first.y, first.z, last.x, last.y, last.z
        ));
    }
    lines.push(format!("  Speed: {} m/s, step {} s", flight.speed, flight.time_step));
    lines.push(format!("  Simulation timeout: {} s", spec.simulation.timeout_secs));
    lines.join("\n")
}

/// Format the placement region as a string
pub fn format_scenario_info(spec: &MissionSpec) -> String {
    let scenario = &spec.scenario;
    let r = scenario.region;
    [
        format!("  Region: x in ({}, {}), y in ({}, {})", r.left, r.right, r.lower, r.upper),
        format!("  Max obstacles: {}", scenario.max_obstacles),
        format!("  Obstacle height: {}", scenario.obstacle_height),
    ]
    .join("\n")
}

/// Format search tunables as a string
pub fn format_search_info(spec: &MissionSpec) -> String {
    let search = &spec.search;
    [
        format!(
            "  Widening: C = {:?}, alpha = {}",
            search.widening_coefficients, search.widening_alpha
        ),
        format!("  Exploration constant: {:.4}", search.exploration_constant),
        format!(
            "  Bands: collision < {} <= near miss <= {} < marginal <= {}",
            search.collision_distance, search.near_miss_distance, search.marginal_distance
        ),
    ]
    .join("\n")
}

/// Print detailed mission summary
pub fn print_detailed_summary(spec: &MissionSpec) {
    println!();
    println!("Mission Summary: {}", spec.display_name());
    println!("{}", format_flight_info(spec));
    println!();
    println!("{}", format_scenario_info(spec));
    println!();
    println!("{}", format_search_info(spec));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(level, LogLevel::Normal, &format!("Validating mission: {}", args.mission.display()));

    let spec = load_mission(&args.mission).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Mission is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
