//! Esquiva: adversarial obstacle scenarios for UAV missions.
//!
//! Esquiva searches for obstacle placements that bring a simulated drone
//! as close as possible to a collision without causing one. The search is
//! a Monte Carlo Tree Search with progressive widening whose states are
//! partially built scenarios; new obstacles are sampled next to the
//! trajectory flown in the parent scenario, and near-miss scenarios are
//! refined by projecting their last obstacle towards the flight path.
//!
//! # Modules
//!
//! - [`geometry`]: vectors, oriented rectangles, circle coverings and samplers
//! - [`scenario`]: obstacles, scenario states and their transitions
//! - [`simulator`]: the simulator contract and a reference simulator
//! - [`search`]: the MCTS engine
//! - [`config`]: YAML mission files and the CLI definition
//! - [`cli`]: command handlers for the `esquiva` binary
//!
//! # Example
//!
//! ```no_run
//! let result = esquiva::generate("mission.yaml", 200)?;
//! for case in &result.test_cases {
//!     println!("{} obstacles, {:?} m", case.obstacles.len(), case.min_distance());
//! }
//! # Ok::<(), esquiva::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scenario;
pub mod search;
pub mod simulator;
pub mod testcase;

pub use error::{Error, Result};
pub use search::{GenerationResult, MctsConfig, ScenarioSearch, SearchStats};
pub use testcase::{Evaluation, TestCase};

/// Run `budget` search iterations on the mission in `mission_file`.
///
/// Uses the reference simulator under the mission's deadline and an
/// operating-system seed. See [`config::generate_from_yaml`] for a
/// seeded variant.
pub fn generate<P: AsRef<std::path::Path>>(
    mission_file: P,
    budget: usize,
) -> Result<GenerationResult> {
    config::generate_from_yaml(mission_file, budget, None)
}
