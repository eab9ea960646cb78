//! Esquiva CLI
//!
//! # Usage
//!
//! ```bash
//! # Search 200 iterations and print a summary
//! esquiva generate mission.yaml
//!
//! # Reproducible run exported as JSON
//! esquiva generate mission.yaml --budget 50 --seed 7 --output cases.json
//!
//! # Validate a mission file
//! esquiva validate mission.yaml --detailed
//! ```

use clap::Parser;
use esquiva::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
