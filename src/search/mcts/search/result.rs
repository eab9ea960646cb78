//! Scenario search result.

use serde::{Deserialize, Serialize};

use super::stats::SearchStats;
use crate::testcase::TestCase;

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Retained test cases in emission order
    pub test_cases: Vec<TestCase>,
    /// Search statistics
    pub stats: SearchStats,
}

impl GenerationResult {
    /// Smallest minimum distance among the retained test cases
    #[must_use]
    pub fn closest_distance(&self) -> Option<f64> {
        self.test_cases.iter().filter_map(TestCase::min_distance).reduce(f64::min)
    }
}
