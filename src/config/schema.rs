//! Mission file schema.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioConfig;
use crate::search::MctsConfig;
use crate::simulator::FlightPlan;

fn default_timeout_secs() -> f64 {
    30.0
}

/// Simulator execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSpec {
    /// Wall-clock deadline for every simulator run, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
}

impl Default for SimulationSpec {
    fn default() -> Self {
        Self { timeout_secs: default_timeout_secs() }
    }
}

impl SimulationSpec {
    /// Deadline as a [`Duration`]; out-of-range values saturate
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::MAX)
    }
}

/// A complete mission definition, as loaded from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSpec {
    /// Human-readable mission name
    #[serde(default)]
    pub name: Option<String>,
    /// Flight flown by the simulator
    pub flight: FlightPlan,
    /// Simulator execution settings
    #[serde(default)]
    pub simulation: SimulationSpec,
    /// Obstacle placement settings
    #[serde(default)]
    pub scenario: ScenarioConfig,
    /// Search settings
    #[serde(default)]
    pub search: MctsConfig,
}

impl MissionSpec {
    /// Name for display, falling back to `"unnamed"`
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}
