//! Monte Carlo Tree Search over obstacle scenarios.
//!
//! # Overview
//!
//! The search builds a tree whose nodes are partially built scenarios.
//! Each iteration runs four phases: Selection, Expansion, Simulation and
//! Backpropagation.
//!
//! - **State**: the obstacles placed so far ([`ScenarioState`])
//! - **Expansion**: a new obstacle near the flown trajectory, or a refined
//!   copy of a near-miss sibling
//! - **Reward**: the negated minimum obstacle distance, so the search is
//!   drawn towards close calls
//!
//! Selection uses progressive widening: a node at depth `d` may grow
//! another child while `children <= C[d] · visits^α`, and otherwise
//! descends to its best UCB1 child. Simulated scenarios that collide or
//! fail are detached from the tree; scenarios within the marginal band
//! are emitted as test cases.
//!
//! # Example
//!
//! ```rust
//! use esquiva::geometry::Point3;
//! use esquiva::scenario::ScenarioConfig;
//! use esquiva::search::{MctsConfig, ScenarioSearch};
//! use esquiva::simulator::{FlightPlan, WaypointSimulator};
//!
//! let plan = FlightPlan::through(vec![Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 50.0, 5.0)]);
//! let mut search = ScenarioSearch::with_seed(
//!     WaypointSimulator,
//!     plan,
//!     ScenarioConfig::default(),
//!     MctsConfig::default(),
//!     7,
//! );
//! let result = search.generate(5);
//! assert_eq!(result.stats.iterations, 5);
//! ```
//!
//! [`ScenarioState`]: crate::scenario::ScenarioState

mod config;
mod node;
mod search;
mod tree;

pub use config::MctsConfig;
pub use node::{Node, NodeId, NodeStats, Score};
pub use search::{GenerationResult, ScenarioSearch, SearchStats};
pub use tree::SearchTree;
