//! CLI argument parsing
//!
//! This module provides the command-line interface for esquiva.
//!
//! # Usage
//!
//! ```bash
//! esquiva generate mission.yaml --budget 200
//! esquiva generate mission.yaml --budget 50 --seed 7 --output cases.json
//! esquiva validate mission.yaml --detailed
//! ```

mod core;

pub use core::{parse_args, Cli, Command, GenerateArgs, ValidateArgs};
