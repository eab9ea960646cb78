//! MCTS configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the scenario search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Exploration constant for UCB1
    pub exploration_constant: f64,
    /// Exponent applied to the visit count by progressive widening
    pub widening_alpha: f64,
    /// Progressive widening coefficient per scenario depth
    pub widening_coefficients: Vec<f64>,
    /// Resamples allowed when a new child duplicates a tried sibling
    pub max_duplicate_retries: usize,
    /// Consecutive no-progress iterations before a warning is logged
    pub stall_threshold: usize,
    /// Distances below this are hard collisions
    pub collision_distance: f64,
    /// Upper end of the near-miss band
    pub near_miss_distance: f64,
    /// Upper end of the marginal band and of test-case retention
    pub marginal_distance: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::FRAC_1_SQRT_2,
            widening_alpha: 0.5,
            widening_coefficients: vec![0.4, 0.5, 0.6, 0.7],
            max_duplicate_retries: 32,
            stall_threshold: 50,
            collision_distance: 0.25,
            near_miss_distance: 1.0,
            marginal_distance: 1.5,
        }
    }
}

impl MctsConfig {
    /// Widening coefficient at `depth`; the last entry covers deeper layers
    #[must_use]
    pub fn widening_coefficient(&self, depth: usize) -> f64 {
        self.widening_coefficients
            .get(depth)
            .or_else(|| self.widening_coefficients.last())
            .copied()
            .unwrap_or(0.0)
    }

    /// Progressive widening: may a node at `depth` with `children` children
    /// and `visits` visits grow another child?
    #[must_use]
    pub fn allows_expansion(&self, depth: usize, children: usize, visits: usize) -> bool {
        let limit = self.widening_coefficient(depth) * (visits as f64).powf(self.widening_alpha);
        children as f64 <= limit
    }
}
