//! Adversarial scenario search.
//!
//! Monte Carlo Tree Search with progressive widening over obstacle
//! scenarios. Rewards come from the mission simulator.

pub mod mcts;

pub use mcts::{
    GenerationResult, MctsConfig, Node, NodeId, NodeStats, ScenarioSearch, Score, SearchStats,
    SearchTree,
};
