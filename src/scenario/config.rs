//! Scenario placement configuration.

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, SamplingParams};

/// Limits and tunables for building obstacle scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Region of interest obstacles must be placed in
    pub region: Bounds,
    /// Obstacle count at which a scenario is terminal
    pub max_obstacles: usize,
    /// Height given to every generated obstacle
    pub obstacle_height: f64,
    /// Circle-covering grid resolution
    pub subdivisions: usize,
    /// Fraction of the region height forming the first obstacle's entry band
    pub entry_fraction: f64,
    /// Rectangle sampling epsilon
    pub sample_eps: f64,
    /// Random shrink range applied to free circles
    pub free_circle_slack: (f64, f64),
    /// Reward reported for failed or obstacle-free runs
    pub baseline_reward: f64,
    /// Minimum distance reported for failed or obstacle-free runs
    pub default_distance: f64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            region: Bounds::new(-40.0, 30.0, 10.0, 40.0),
            max_obstacles: 3,
            obstacle_height: 25.0,
            subdivisions: 4,
            entry_fraction: 1.0 / 6.0,
            sample_eps: 0.1,
            free_circle_slack: (0.5, 0.9),
            baseline_reward: 0.0,
            default_distance: 5.0,
        }
    }
}

impl ScenarioConfig {
    /// Sampler parameters derived from this configuration
    #[must_use]
    pub fn sampling(&self) -> SamplingParams {
        SamplingParams {
            subdivisions: self.subdivisions,
            eps: self.sample_eps,
            slack: self.free_circle_slack,
        }
    }

    /// Upper y limit of the band the first obstacle is drawn from
    #[must_use]
    pub fn entry_cutoff(&self) -> f64 {
        self.region.lower + self.entry_fraction * self.region.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_region() {
        let config = ScenarioConfig::default();
        assert_eq!(config.max_obstacles, 3);
        assert!((config.entry_cutoff() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: ScenarioConfig = serde_yaml::from_str("max_obstacles: 2\n").unwrap();
        assert_eq!(config.max_obstacles, 2);
        assert_eq!(config.subdivisions, 4);
        assert_eq!(config.region, ScenarioConfig::default().region);
    }
}
