//! Mission configuration
//!
//! YAML mission files describe the flight, the placement region and the
//! search tunables. Everything except the flight plan is optional.

mod cli;
mod generate;
mod loader;
mod schema;
mod validate;

pub use cli::{parse_args, Cli, Command, GenerateArgs, ValidateArgs};
pub use generate::{generate_from_yaml, generate_mission, write_result};
pub use loader::{load_mission, parse_mission};
pub use schema::{MissionSpec, SimulationSpec};
pub use validate::{validate_mission, ValidationError};
