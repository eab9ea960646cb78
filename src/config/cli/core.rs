//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Esquiva: adversarial obstacle scenarios for UAV missions
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "esquiva")]
#[command(version)]
#[command(about = "Generate near-miss obstacle scenarios for UAV missions")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Search for near-miss scenarios of a mission
    Generate(GenerateArgs),

    /// Validate a mission file without searching
    Validate(ValidateArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Path to YAML mission file
    #[arg(value_name = "MISSION")]
    pub mission: PathBuf,

    /// Number of search iterations
    #[arg(short, long, default_value_t = 200)]
    pub budget: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the generated test cases as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML mission file
    #[arg(value_name = "MISSION")]
    pub mission: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Parse CLI arguments from an iterator (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
