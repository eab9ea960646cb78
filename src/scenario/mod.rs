//! Obstacle scenarios and the transitions the search applies to them.

mod config;
mod error;
mod list;
mod obstacle;
mod placement;
mod state;

pub use config::ScenarioConfig;
pub use error::PlacementError;
pub use list::Scenario;
pub use obstacle::{Obstacle, Position, Size};
pub use state::ScenarioState;
