//! Scenario search algorithm implementation.
//!
//! One iteration runs select, expand, simulate, classify, prune, retain
//! and backpropagate to completion before the next one starts. Placement
//! and simulation failures are absorbed at the node they occur on, so a
//! run always performs the requested number of iterations.

use std::sync::Arc;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::result::GenerationResult;
use super::stats::SearchStats;
use crate::scenario::{PlacementError, ScenarioConfig, ScenarioState};
use crate::search::mcts::config::MctsConfig;
use crate::search::mcts::node::{NodeId, Score};
use crate::search::mcts::tree::SearchTree;
use crate::simulator::Simulator;
use crate::testcase::{Evaluation, TestCase};

/// Where selection stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    /// A new child was created and awaits simulation
    Expanded(NodeId),
    /// Descent reached a terminal scenario
    Terminal(NodeId),
    /// Expansion failed at a node without children
    Stalled(NodeId),
}

/// MCTS over obstacle scenarios
pub struct ScenarioSearch<S: Simulator, R = StdRng> {
    /// Search tree
    tree: SearchTree,
    /// Mission simulator
    simulator: S,
    /// Mission flown by every simulation
    mission: S::Mission,
    /// Configuration
    config: MctsConfig,
    /// Random number generator shared by every sampling step
    rng: R,
    /// Emitted test cases
    test_cases: Vec<TestCase>,
    stats: SearchStats,
    stall_streak: usize,
    root_simulated: bool,
}

impl<S: Simulator> ScenarioSearch<S> {
    /// Create a search seeded from the operating system
    pub fn new(
        simulator: S,
        mission: S::Mission,
        scenario: ScenarioConfig,
        config: MctsConfig,
    ) -> Self {
        Self::with_rng(simulator, mission, scenario, config, StdRng::from_os_rng())
    }

    /// Create a search with a seed for reproducibility
    pub fn with_seed(
        simulator: S,
        mission: S::Mission,
        scenario: ScenarioConfig,
        config: MctsConfig,
        seed: u64,
    ) -> Self {
        Self::with_rng(simulator, mission, scenario, config, StdRng::seed_from_u64(seed))
    }
}

impl<S: Simulator, R: Rng> ScenarioSearch<S, R> {
    /// Create a search drawing from `rng`
    pub fn with_rng(
        simulator: S,
        mission: S::Mission,
        scenario: ScenarioConfig,
        config: MctsConfig,
        rng: R,
    ) -> Self {
        let tree = SearchTree::new(ScenarioState::new(Arc::new(scenario)));
        Self {
            tree,
            simulator,
            mission,
            config,
            rng,
            test_cases: Vec::new(),
            stats: SearchStats::default(),
            stall_streak: 0,
            root_simulated: false,
        }
    }

    /// The search tree
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Test cases emitted so far
    #[must_use]
    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// Statistics so far
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run `budget` search iterations and return every retained test case.
    ///
    /// The root is simulated once, before the first iteration of the first
    /// call. Further calls continue the same tree.
    pub fn generate(&mut self, budget: usize) -> GenerationResult {
        info!(budget, "starting scenario search");
        if !self.root_simulated {
            self.simulate_root();
        }
        for _ in 0..budget {
            self.iterate();
        }
        self.stats.tree_size = self.tree.size();
        info!(
            iterations = self.stats.iterations,
            test_cases = self.test_cases.len(),
            pruned = self.stats.pruned_nodes,
            tree_size = self.stats.tree_size,
            "scenario search finished"
        );
        GenerationResult {
            test_cases: self.test_cases.clone(),
            stats: self.stats.clone(),
        }
    }

    fn simulate_root(&mut self) {
        let root = self.tree.root_id();
        let evaluation = self.tree[root].state.evaluate(&self.simulator, &self.mission);
        self.stats.simulations += 1;
        let node = &mut self.tree[root];
        node.score = Score::classify(evaluation.min_distance, &self.config);
        let reward = evaluation.reward;
        node.evaluation = Some(evaluation);
        self.backpropagate(root, reward);
        self.root_simulated = true;
    }

    /// One full iteration
    fn iterate(&mut self) {
        self.stats.iterations += 1;
        match self.select() {
            Selection::Expanded(id) => {
                let evaluation = self.tree[id].state.evaluate(&self.simulator, &self.mission);
                self.stats.simulations += 1;
                self.settle(id, evaluation);
                self.stall_streak = 0;
            }
            Selection::Terminal(id) => {
                let evaluation = match self.tree[id].evaluation.clone() {
                    Some(cached) => cached,
                    None => {
                        self.stats.simulations += 1;
                        self.tree[id].state.evaluate(&self.simulator, &self.mission)
                    }
                };
                self.settle(id, evaluation);
                self.stall_streak = 0;
            }
            Selection::Stalled(id) => self.record_stall(id),
        }
    }

    /// Selection phase: descend with progressive widening and UCB1
    fn select(&mut self) -> Selection {
        let mut current = self.tree.root_id();
        loop {
            let node = &self.tree[current];
            if node.state.is_terminal() {
                return Selection::Terminal(current);
            }
            if self.config.allows_expansion(node.depth(), node.children.len(), node.stats.visits) {
                match self.expand(current) {
                    Ok(child) => return Selection::Expanded(child),
                    Err(e) => {
                        self.stats.placement_failures += 1;
                        debug!(node = current.value(), error = %e, "expansion failed");
                    }
                }
            }
            match self.best_child(current) {
                Some(child) => current = child,
                None => return Selection::Stalled(current),
            }
        }
    }

    /// Child with the highest UCB1 score; the first one wins ties
    fn best_child(&self, id: NodeId) -> Option<NodeId> {
        let parent_visits = self.tree[id].stats.visits;
        let c = self.config.exploration_constant;
        self.tree
            .children(id)
            .into_iter()
            .map(|child| (child.id, child.stats.ucb1(parent_visits, c)))
            .fold(None, |best: Option<(NodeId, f64)>, (cid, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((cid, score)),
            })
            .map(|(cid, _)| cid)
    }

    /// Expansion phase: refine a near-miss sibling or add a novel obstacle
    fn expand(&mut self, parent: NodeId) -> Result<NodeId, PlacementError> {
        let siblings: Vec<NodeId> = self
            .tree
            .children(parent)
            .into_iter()
            .filter(|child| {
                child.score.is_near_miss() && child.state.is_last_obstacle_closest()
            })
            .map(|child| child.id)
            .collect();

        let state = match siblings.choose(&mut self.rng) {
            Some(&sibling) => {
                debug!(
                    parent = parent.value(),
                    sibling = sibling.value(),
                    "refining near-miss sibling"
                );
                self.stats.sibling_refinements += 1;
                self.tree[sibling].state.refine_last_obstacle_by_projection(&mut self.rng)?
            }
            None => self.novel_child(parent)?,
        };

        debug_assert_eq!(state.len(), self.tree[parent].state.len() + 1);
        let child = self.tree.add_child(parent, state);
        self.stats.expansions += 1;
        debug!(parent = parent.value(), child = child.value(), "expanded");
        Ok(child)
    }

    /// A new obstacle on `parent`'s state, resampled while it duplicates a
    /// tried child (terminal duplicates are accepted)
    pub(super) fn novel_child(&mut self, parent: NodeId) -> Result<ScenarioState, PlacementError> {
        let retries = self.config.max_duplicate_retries;
        let node = &self.tree[parent];
        for _ in 0..=retries {
            let state = node.state.add_obstacle_near_trajectory(&mut self.rng)?;
            let duplicate = node.children.iter().any(|&c| self.tree[c].state == state);
            if !duplicate || state.is_terminal() {
                return Ok(state);
            }
        }
        Err(PlacementError::DuplicatesExhausted { attempts: retries + 1 })
    }

    /// Classify, prune, retain and backpropagate one evaluation
    fn settle(&mut self, id: NodeId, evaluation: Evaluation) {
        let distance = evaluation.min_distance.abs();
        let score = Score::classify(distance, &self.config);
        let is_root = id == self.tree.root_id();
        let node = &mut self.tree[id];
        node.score = score;

        let invalid =
            !node.state.is_empty() && (evaluation.is_failed() || evaluation.reward == 0.0);
        let prune = !is_root && (invalid || distance < self.config.collision_distance);

        if !is_root && !node.retained && distance <= self.config.marginal_distance {
            node.retained = true;
            self.test_cases.push(evaluation.test_case.clone());
            self.stats.test_cases += 1;
        }
        let reward = evaluation.reward;
        node.evaluation = Some(evaluation);

        if prune && self.tree.detach(id) {
            self.stats.pruned_nodes += 1;
            debug!(node = id.value(), distance, "pruned");
        }
        debug!(node = id.value(), score = score.value(), reward, "simulated");
        self.backpropagate(id, reward);
    }

    /// Backpropagation phase: walk parent links up to the root
    fn backpropagate(&mut self, id: NodeId, reward: f64) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &mut self.tree[node_id];
            node.stats.update(reward);
            current = node.parent;
        }
    }

    fn record_stall(&mut self, id: NodeId) {
        self.stats.stalled_iterations += 1;
        self.stall_streak += 1;
        self.stats.max_stall_streak = self.stats.max_stall_streak.max(self.stall_streak);
        debug!(node = id.value(), streak = self.stall_streak, "no progress");
        if self.stall_streak == self.config.stall_threshold {
            warn!(
                node = id.value(),
                iterations = self.stall_streak,
                "search is not making progress; every expansion attempt is failing"
            );
        }
    }
}
