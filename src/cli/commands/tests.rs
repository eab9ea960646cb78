//! CLI command tests

use super::*;
use crate::config::{GenerateArgs, ValidateArgs};
use crate::search::GenerationResult;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a minimal valid mission file for testing
fn create_test_mission(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("mission.yaml");
    let mission = r"
name: straight-north
flight:
  waypoints: [[0.0, 0.0, 5.0], [0.0, 50.0, 5.0]]
simulation:
  timeout_secs: 10
";
    std::fs::write(&path, mission).unwrap();
    path
}

fn cli(command: Command) -> Cli {
    Cli { command, verbose: false, quiet: true }
}

#[test]
fn test_validate_command_basic() {
    let dir = TempDir::new().unwrap();
    let mission = create_test_mission(&dir);
    let result = run_command(cli(Command::Validate(ValidateArgs { mission, detailed: false })));
    assert!(result.is_ok());
}

#[test]
fn test_validate_command_rejects_bad_mission() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "flight:\n  waypoints: []\n").unwrap();

    let args = ValidateArgs { mission: path, detailed: false };
    let err = run_command(cli(Command::Validate(args))).unwrap_err();
    assert!(err.contains("Validation failed"));
    assert!(err.contains("at least 2 waypoints"));
}

#[test]
fn test_validate_command_missing_file() {
    let args = ValidateArgs { mission: PathBuf::from("/nonexistent/mission.yaml"), detailed: true };
    assert!(run_command(cli(Command::Validate(args))).is_err());
}

#[test]
fn test_generate_command_writes_json() {
    let dir = TempDir::new().unwrap();
    let mission = create_test_mission(&dir);
    let output = dir.path().join("cases.json");

    let args = GenerateArgs { mission, budget: 4, seed: Some(3), output: Some(output.clone()) };
    run_command(cli(Command::Generate(args))).unwrap();

    let json = std::fs::read_to_string(&output).unwrap();
    let result: GenerationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result.stats.iterations, 4);
    assert!(result.test_cases.len() <= 4);
}

#[test]
fn test_generate_command_zero_budget_fails() {
    let dir = TempDir::new().unwrap();
    let mission = create_test_mission(&dir);
    let args = GenerateArgs { mission, budget: 0, seed: None, output: None };

    let err = run_command(cli(Command::Generate(args))).unwrap_err();
    assert!(err.contains("Invalid budget"));
}
