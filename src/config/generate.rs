//! Main entry points for YAML-based scenario generation

use std::fs;
use std::path::Path;

use tracing::info;

use super::loader::load_mission;
use super::schema::MissionSpec;
use crate::error::{Error, Result};
use crate::search::{GenerationResult, ScenarioSearch};
use crate::simulator::{DeadlineSimulator, WaypointSimulator};

/// Generate test cases for the mission in a YAML file
///
/// This is the main entry point for declarative generation. It:
/// 1. Loads, parses and validates the mission
/// 2. Wraps the reference simulator with the mission's deadline
/// 3. Runs `budget` search iterations
///
/// # Example
///
/// ```no_run
/// use esquiva::config::generate_from_yaml;
///
/// let result = generate_from_yaml("mission.yaml", 200, Some(7))?;
/// println!("{} test cases", result.test_cases.len());
/// # Ok::<(), esquiva::Error>(())
/// ```
pub fn generate_from_yaml<P: AsRef<Path>>(
    path: P,
    budget: usize,
    seed: Option<u64>,
) -> Result<GenerationResult> {
    if budget == 0 {
        return Err(Error::InvalidBudget(budget));
    }
    let spec = load_mission(path)?;
    Ok(generate_mission(spec, budget, seed))
}

/// Run the search for an already validated mission
pub fn generate_mission(spec: MissionSpec, budget: usize, seed: Option<u64>) -> GenerationResult {
    info!(mission = spec.display_name(), budget, ?seed, "generating scenarios");
    let simulator = DeadlineSimulator::new(WaypointSimulator, spec.simulation.timeout());
    info!(deadline = ?simulator.deadline(), "simulator deadline");
    let mut search = match seed {
        Some(seed) => {
            ScenarioSearch::with_seed(simulator, spec.flight, spec.scenario, spec.search, seed)
        }
        None => ScenarioSearch::new(simulator, spec.flight, spec.scenario, spec.search),
    };
    search.generate(budget)
}

/// Write a generation result as pretty-printed JSON
pub fn write_result<P: AsRef<Path>>(path: P, result: &GenerationResult) -> Result<()> {
    let json =
        serde_json::to_string_pretty(result).map_err(|e| Error::Serialization(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
