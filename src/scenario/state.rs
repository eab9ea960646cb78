//! Scenario states: an obstacle list plus the artifacts of simulating it.

use std::sync::Arc;

use tracing::warn;

use super::config::ScenarioConfig;
use super::list::Scenario;
use super::obstacle::Obstacle;
use crate::simulator::{Simulator, Trajectory};
use crate::testcase::{Evaluation, TestCase};

/// A candidate scenario in the search.
///
/// States are values: every transition returns a new state sharing the
/// parent's obstacle prefix. A derived state inherits its parent's
/// trajectory as a placement hint, but it is marked stale until
/// [`ScenarioState::evaluate`] runs on the state itself.
#[derive(Debug, Clone)]
pub struct ScenarioState {
    scenario: Scenario,
    config: Arc<ScenarioConfig>,
    trajectory: Option<Arc<Trajectory>>,
    distances: Arc<[f64]>,
    fresh: bool,
}

impl ScenarioState {
    /// The empty scenario
    #[must_use]
    pub fn new(config: Arc<ScenarioConfig>) -> Self {
        Self::from_scenario(Scenario::new(), config)
    }

    /// A state holding `obstacles` in placement order, not yet simulated
    #[must_use]
    pub fn from_obstacles(
        obstacles: impl IntoIterator<Item = Obstacle>,
        config: Arc<ScenarioConfig>,
    ) -> Self {
        Self::from_scenario(obstacles.into_iter().collect(), config)
    }

    fn from_scenario(scenario: Scenario, config: Arc<ScenarioConfig>) -> Self {
        Self { scenario, config, trajectory: None, distances: Arc::from(Vec::new()), fresh: false }
    }

    /// A stale child state holding `scenario`
    pub(crate) fn derive(&self, scenario: Scenario) -> Self {
        Self {
            scenario,
            config: Arc::clone(&self.config),
            trajectory: self.trajectory.clone(),
            distances: Arc::from(Vec::new()),
            fresh: false,
        }
    }

    /// The obstacle sequence
    #[must_use]
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Placement configuration shared by the whole search
    #[must_use]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Most recent trajectory available to this state, possibly inherited
    #[must_use]
    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_deref()
    }

    /// Per-obstacle distances from this state's own simulation
    #[must_use]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// True once this exact state has been simulated successfully
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Number of obstacles
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenario.len()
    }

    /// True for the obstacle-free scenario
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenario.is_empty()
    }

    /// True once the scenario holds the maximum number of obstacles
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.scenario.len() >= self.config.max_obstacles
    }

    /// Run `simulator` on the current obstacles and score the outcome.
    ///
    /// Failures are absorbed: the state keeps its inherited trajectory and
    /// the baseline reward and default distance are reported. An empty
    /// scenario also scores the baseline but caches the flown trajectory.
    pub fn evaluate<S: Simulator>(&mut self, simulator: &S, mission: &S::Mission) -> Evaluation {
        let obstacles = self.scenario.to_vec();
        let baseline = |test_case| Evaluation {
            reward: self.config.baseline_reward,
            min_distance: self.config.default_distance,
            test_case,
        };

        let outcome = simulator.execute(mission, &obstacles).and_then(Trajectory::validate);
        let trajectory = match outcome {
            Ok(trajectory) => Arc::new(trajectory),
            Err(e) => {
                warn!(obstacles = obstacles.len(), error = %e, "simulation failed");
                self.fresh = false;
                return baseline(TestCase { obstacles, trajectory: None, distances: Vec::new() });
            }
        };

        let distances: Vec<f64> = obstacles
            .iter()
            .map(|ob| trajectory.min_distance_to(std::slice::from_ref(ob)))
            .collect();
        self.trajectory = Some(Arc::clone(&trajectory));
        self.distances = Arc::from(distances.as_slice());
        self.fresh = true;

        let test_case = TestCase { obstacles, trajectory: Some(trajectory), distances };
        match test_case.min_distance() {
            Some(min_distance) => Evaluation { reward: -min_distance, min_distance, test_case },
            None => baseline(test_case),
        }
    }

    /// True iff the most recent obstacle is (one of) the closest to the
    /// trajectory. Requires this state's own simulation.
    #[must_use]
    pub fn is_last_obstacle_closest(&self) -> bool {
        if !self.fresh || self.distances.len() != self.scenario.len() {
            return false;
        }
        match self.distances.split_last() {
            Some((&last, _)) => self.distances.iter().all(|&d| last <= d),
            None => false,
        }
    }
}

/// States compare by obstacle set
impl PartialEq for ScenarioState {
    fn eq(&self, other: &Self) -> bool {
        self.scenario == other.scenario
    }
}
