//! Scenario search statistics.

use serde::{Deserialize, Serialize};

/// Counters collected over a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search iterations performed (the root simulation is not one)
    pub iterations: usize,
    /// Simulator runs, the root's included
    pub simulations: usize,
    /// Nodes created by expansion
    pub expansions: usize,
    /// Expansions produced by refining a near-miss sibling
    pub sibling_refinements: usize,
    /// Expansion attempts that failed to produce a state
    pub placement_failures: usize,
    /// Nodes detached after simulation
    pub pruned_nodes: usize,
    /// Test cases emitted
    pub test_cases: usize,
    /// Iterations that neither created nor re-evaluated a node
    pub stalled_iterations: usize,
    /// Longest run of consecutive stalled iterations
    pub max_stall_streak: usize,
    /// Nodes ever created, detached ones included
    pub tree_size: usize,
}
