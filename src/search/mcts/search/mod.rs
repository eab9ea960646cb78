//! Scenario search algorithm implementation.
//!
//! This module contains the main search loop: selection with progressive
//! widening, expansion, simulation, pruning and backpropagation.

mod algorithm;
mod result;
mod stats;

#[cfg(test)]
mod tests;

pub use algorithm::ScenarioSearch;
pub use result::GenerationResult;
pub use stats::SearchStats;
