//! Mission validation
//!
//! Validates mission specifications for correctness before a search runs.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::validate_mission;
