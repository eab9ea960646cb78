//! Generate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{generate_from_yaml, write_result, GenerateArgs};
use crate::search::GenerationResult;
use crate::testcase::TestCase;

/// One summary line per test case
pub fn format_test_case(index: usize, tc: &TestCase) -> String {
    let distance = tc.min_distance().map_or_else(|| "n/a".to_string(), |d| format!("{d:.3} m"));
    format!("  #{index:<3} obstacles: {}  min distance: {distance}", tc.obstacles.len())
}

/// Run summary
pub fn format_summary(result: &GenerationResult) -> String {
    let stats = &result.stats;
    let mut lines = vec![
        format!("  Test cases: {}", result.test_cases.len()),
        format!("  Iterations: {}", stats.iterations),
        format!("  Simulations: {}", stats.simulations),
        format!("  Nodes: {} ({} pruned)", stats.tree_size, stats.pruned_nodes),
    ];
    if let Some(d) = result.closest_distance() {
        lines.push(format!("  Closest approach: {d:.3} m"));
    }
    if stats.stalled_iterations > 0 {
        lines.push(format!(
            "  Stalled iterations: {} (longest streak {})",
            stats.stalled_iterations, stats.max_stall_streak
        ));
    }
    lines.join("\n")
}

pub fn run_generate(args: GenerateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Generating scenarios for: {} (budget {})", args.mission.display(), args.budget),
    );

    let result = generate_from_yaml(&args.mission, args.budget, args.seed)
        .map_err(|e| format!("Generation failed: {e}"))?;

    log(level, LogLevel::Normal, &format_summary(&result));
    for (i, tc) in result.test_cases.iter().enumerate() {
        log(level, LogLevel::Verbose, &format_test_case(i, tc));
    }

    if let Some(path) = &args.output {
        write_result(path, &result)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        log(level, LogLevel::Normal, &format!("Wrote test cases to {}", path.display()));
    }

    Ok(())
}
