//! Node types and statistics for the scenario search.

use serde::{Deserialize, Serialize};

use super::config::MctsConfig;
use crate::scenario::ScenarioState;
use crate::testcase::Evaluation;

/// Unique identifier for nodes in the search tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Creates a new NodeId
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the underlying id value
    #[must_use]
    pub const fn value(&self) -> usize {
        self.0
    }
}

/// Visit statistics for a node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStats {
    /// Total visits to this node
    pub visits: usize,
    /// Accumulated reward (a sum, not a mean)
    pub total_reward: f64,
}

impl NodeStats {
    /// Record one backpropagated reward
    pub fn update(&mut self, reward: f64) {
        self.visits += 1;
        self.total_reward += reward;
    }

    /// Mean reward, zero before the first visit
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / self.visits as f64
        }
    }

    /// UCB1 score: `mean + c·sqrt(2·ln(N) / n)`
    #[must_use]
    pub fn ucb1(&self, parent_visits: usize, c: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let ln_parent = (parent_visits as f64).max(1.0).ln();
        let exploration = c * (2.0 * ln_parent / self.visits as f64).sqrt();
        self.mean_reward() + exploration
    }
}

/// How close a simulated scenario came to a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Score {
    /// Not simulated, failed, or clear of every band
    #[default]
    Unclassified = 0,
    /// Within the marginal band
    Marginal = 1,
    /// Within the near-miss band
    NearMiss = 2,
    /// Closer than the collision distance
    Collision = 5,
}

impl Score {
    /// Classify a minimum obstacle distance
    #[must_use]
    pub fn classify(min_distance: f64, config: &MctsConfig) -> Self {
        let d = min_distance.abs();
        if d < config.collision_distance {
            Self::Collision
        } else if d <= config.near_miss_distance {
            Self::NearMiss
        } else if d <= config.marginal_distance {
            Self::Marginal
        } else {
            Self::Unclassified
        }
    }

    /// Numeric class value
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Close call without a collision
    #[must_use]
    pub const fn is_near_miss(self) -> bool {
        matches!(self, Self::Marginal | Self::NearMiss)
    }
}

/// A node in the search tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Scenario at this node
    pub state: ScenarioState,
    /// Parent node id (None for root and for pruned nodes)
    pub parent: Option<NodeId>,
    /// Child node ids in creation order
    pub children: Vec<NodeId>,
    /// Statistics for this node
    pub stats: NodeStats,
    /// Classification from the latest evaluation
    pub score: Score,
    /// Latest evaluation, kept for terminal revisits
    pub evaluation: Option<Evaluation>,
    /// Whether the node's test case has been emitted
    pub retained: bool,
    /// Whether the node was detached from the tree
    pub pruned: bool,
}

impl Node {
    /// Create a new root node
    #[must_use]
    pub fn root(state: ScenarioState) -> Self {
        Self {
            id: NodeId::new(0),
            state,
            parent: None,
            children: Vec::new(),
            stats: NodeStats::default(),
            score: Score::Unclassified,
            evaluation: None,
            retained: false,
            pruned: false,
        }
    }

    /// Create a new child node
    #[must_use]
    pub fn child(id: NodeId, state: ScenarioState, parent: NodeId) -> Self {
        Self { id, parent: Some(parent), ..Self::root(state) }
    }

    /// Returns true if this node has no children
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Scenario depth (obstacle count)
    #[must_use]
    pub fn depth(&self) -> usize {
        self.state.len()
    }
}
