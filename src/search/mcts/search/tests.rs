//! Tests for the scenario search.

use super::*;
use crate::geometry::Point3;
use crate::scenario::{Obstacle, PlacementError, ScenarioConfig};
use crate::search::mcts::config::MctsConfig;
use crate::search::mcts::node::{NodeId, Score};
use crate::simulator::{FlightPlan, SimulationError, Simulator, Trajectory, WaypointSimulator};
use proptest::prelude::*;
use rand::RngCore;

/// Flies north, sidestepping east of every obstacle by a fixed clearance,
/// so every scenario with obstacles reports exactly that clearance.
struct Sidestep(f64);

impl Simulator for Sidestep {
    type Mission = ();

    fn execute(&self, _: &(), obstacles: &[Obstacle]) -> Result<Trajectory, SimulationError> {
        let eastmost = obstacles
            .iter()
            .flat_map(|ob| ob.footprint().corners())
            .max_by(|a, b| a.x.total_cmp(&b.x));
        let x = eastmost.map_or(0.0, |c| c.x + self.0);
        let mut ys: Vec<f64> = (0..=50).map(f64::from).collect();
        // Pass exactly abeam of the eastmost corner.
        ys.extend(eastmost.map(|c| c.y));
        ys.sort_by(f64::total_cmp);
        Ok(Trajectory::new(ys.into_iter().map(|y| Point3::new(x, y, 5.0)).collect()))
    }
}

/// Never completes a flight
struct AlwaysFails;

impl Simulator for AlwaysFails {
    type Mission = ();

    fn execute(&self, _: &(), _: &[Obstacle]) -> Result<Trajectory, SimulationError> {
        Err(SimulationError::Crashed("simulator unavailable".into()))
    }
}

/// Flies the obstacle-free mission but fails once obstacles are present
struct FailsWithObstacles;

impl Simulator for FailsWithObstacles {
    type Mission = ();

    fn execute(&self, _: &(), obstacles: &[Obstacle]) -> Result<Trajectory, SimulationError> {
        if obstacles.is_empty() {
            Sidestep(0.0).execute(&(), obstacles)
        } else {
            Err(SimulationError::Diverged { steps: 0 })
        }
    }
}

/// Flies through a single point of the region; with obstacles present it
/// flies the same line far to the east
struct SinglePoint;

impl Simulator for SinglePoint {
    type Mission = ();

    fn execute(&self, _: &(), obstacles: &[Obstacle]) -> Result<Trajectory, SimulationError> {
        let x = if obstacles.is_empty() { 0.0 } else { 20.0 };
        let ys = [0.0, 12.0, 50.0];
        Ok(Trajectory::new(ys.into_iter().map(|y| Point3::new(x, y, 5.0)).collect()))
    }
}

/// Returns the same bits on every draw, so every resample repeats
struct Frozen;

impl RngCore for Frozen {
    fn next_u32(&mut self) -> u32 {
        0x5555_5555
    }

    fn next_u64(&mut self) -> u64 {
        0x5555_5555_5555_5555
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0x55);
    }
}

fn search<S: Simulator<Mission = ()>>(sim: S, seed: u64) -> ScenarioSearch<S> {
    ScenarioSearch::with_seed(sim, (), ScenarioConfig::default(), MctsConfig::default(), seed)
}

fn assert_tree_invariants<S: Simulator>(search: &ScenarioSearch<S>) {
    let tree = search.tree();
    for id in tree.reachable() {
        let node = &tree[id];
        assert!(node.stats.visits > 0, "reachable node {id:?} was never visited");
        assert!(node.stats.mean_reward() <= 0.0);
        assert!(!node.pruned);
        assert!(node.depth() <= 3);
        if id != tree.root_id() {
            let distance =
                node.evaluation.as_ref().map_or(f64::INFINITY, |e| e.min_distance);
            assert!(distance >= 0.25, "collision node {id:?} still reachable");
        }
    }
}

// ========================================
// Root handling
// ========================================

#[test]
fn test_root_simulated_once_and_never_pruned() {
    let mut s = search(Sidestep(3.0), 0);
    let result = s.generate(0);
    let root = s.tree().root();
    assert_eq!(root.stats.visits, 1);
    assert_eq!(root.stats.total_reward, 0.0);
    let eval = root.evaluation.as_ref().unwrap();
    assert_eq!(eval.min_distance, 5.0);
    assert_eq!(root.score, Score::Unclassified);
    assert!(!root.pruned);
    assert!(result.test_cases.is_empty());
    assert_eq!(result.stats.simulations, 1);
    assert_eq!(result.stats.iterations, 0);

    s.generate(3);
    assert_eq!(s.stats().simulations, 1 + s.stats().expansions);
    assert!(!s.tree().root().pruned);
}

#[test]
fn test_failing_root_still_counts_one_visit() {
    let mut s = search(AlwaysFails, 0);
    s.generate(0);
    assert_eq!(s.tree().root().stats.visits, 1);
    assert_eq!(s.tree().root().evaluation.as_ref().unwrap().reward, 0.0);
}

// ========================================
// Budget
// ========================================

#[test]
fn test_budget_one_yields_at_most_one_test_case() {
    for seed in 0..10 {
        let result = search(Sidestep(0.5), seed).generate(1);
        assert!(result.test_cases.len() <= 1);
        assert_eq!(result.stats.iterations, 1);
    }
}

#[test]
fn test_budget_one_with_reference_simulator() {
    let plan = FlightPlan::through(vec![Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 50.0, 5.0)]);
    let mut s = ScenarioSearch::with_seed(
        WaypointSimulator,
        plan,
        ScenarioConfig::default(),
        MctsConfig::default(),
        11,
    );
    let result = s.generate(1);
    assert!(result.test_cases.len() <= 1);
    assert_eq!(result.stats.simulations, 2);
    assert_eq!(s.tree().size(), 2);
}

// ========================================
// Classification, pruning, retention
// ========================================

#[test]
fn test_collisions_are_pruned_but_retained() {
    let mut s = search(Sidestep(0.1), 7);
    let result = s.generate(20);

    assert_eq!(result.test_cases.len(), 20);
    for tc in &result.test_cases {
        assert!((tc.min_distance().unwrap() - 0.1).abs() < 1e-9);
    }
    assert_eq!(result.stats.pruned_nodes, 20);
    assert_eq!(s.tree().reachable(), vec![NodeId::new(0)]);
    // Each pruned node only updated itself.
    assert_eq!(s.tree().root().stats.visits, 1);
    for id in 1..s.tree().size() {
        let node = &s.tree()[NodeId::new(id)];
        assert!(node.pruned);
        assert_eq!(node.score, Score::Collision);
        assert_eq!(node.stats.visits, 1);
    }
}

#[test]
fn test_failed_runs_with_obstacles_are_pruned() {
    let mut s = search(FailsWithObstacles, 3);
    let result = s.generate(10);
    assert!(result.test_cases.is_empty());
    assert_eq!(result.stats.expansions, 10);
    assert_eq!(result.stats.pruned_nodes, 10);
    assert_eq!(s.tree().reachable(), vec![NodeId::new(0)]);
}

#[test]
fn test_failed_runs_pruned_with_non_zero_baseline() {
    let scenario = ScenarioConfig { baseline_reward: -1.0, ..ScenarioConfig::default() };
    let mut s =
        ScenarioSearch::with_seed(FailsWithObstacles, (), scenario, MctsConfig::default(), 3);
    let result = s.generate(10);

    assert_eq!(result.stats.expansions, 10);
    assert_eq!(result.stats.pruned_nodes, 10);
    assert!(result.test_cases.is_empty());
    assert_eq!(s.tree().reachable(), vec![NodeId::new(0)]);
    for id in 1..s.tree().size() {
        let node = &s.tree()[NodeId::new(id)];
        assert!(node.pruned);
        assert!(node.evaluation.as_ref().unwrap().is_failed());
    }
}

#[test]
fn test_near_misses_grow_tree_and_refine_siblings() {
    let mut s = search(Sidestep(0.5), 5);
    let result = s.generate(60);

    assert!(!result.test_cases.is_empty());
    for tc in &result.test_cases {
        assert!((tc.min_distance().unwrap() - 0.5).abs() < 1e-9);
    }
    assert_eq!(result.stats.pruned_nodes, 0);
    assert!(s.tree().reachable().len() > 1);
    assert!(result.stats.sibling_refinements > 0);
    assert_tree_invariants(&s);
}

#[test]
fn test_far_scenarios_are_not_retained() {
    let mut s = search(Sidestep(3.0), 2);
    let result = s.generate(25);
    assert!(result.test_cases.is_empty());
    assert_eq!(result.stats.pruned_nodes, 0);
    assert_tree_invariants(&s);
}

#[test]
fn test_terminal_revisits_retain_once() {
    let scenario = ScenarioConfig { max_obstacles: 1, ..ScenarioConfig::default() };
    let mut s = ScenarioSearch::with_seed(Sidestep(0.5), (), scenario, MctsConfig::default(), 9);
    let result = s.generate(30);

    let children = s.tree().root().children.len();
    assert!(children >= 1);
    assert_eq!(result.test_cases.len(), s.tree().size() - 1);
    assert_eq!(result.stats.test_cases, result.test_cases.len());
    // Revisits do not simulate again.
    assert_eq!(result.stats.simulations, s.tree().size());
    assert_eq!(s.tree().root().stats.visits, 31);
}

// ========================================
// Duplicate resampling
// ========================================

#[test]
fn test_duplicate_resampling_is_bounded() {
    let config = MctsConfig { widening_coefficients: vec![10.0; 4], ..MctsConfig::default() };
    let retries = config.max_duplicate_retries;
    let scenario = ScenarioConfig::default();
    let mut s = ScenarioSearch::with_rng(SinglePoint, (), scenario, config, Frozen);

    s.generate(1);
    let root = s.tree().root_id();
    assert_eq!(s.tree().root().children.len(), 1);
    assert_eq!(s.stats().placement_failures, 0);

    let attempt = s.novel_child(root);
    assert!(matches!(
        attempt,
        Err(PlacementError::DuplicatesExhausted { attempts }) if attempts == retries + 1
    ));

    // The next root expansion repeats the first child and gives up.
    let result = s.generate(1);
    assert_eq!(result.stats.placement_failures, 1);
    assert_eq!(s.tree().root().children.len(), 1);
}

// ========================================
// No-progress diagnostic
// ========================================

#[test]
fn test_failing_simulator_stalls_every_iteration() {
    let mut s = search(AlwaysFails, 1);
    let result = s.generate(12);
    assert_eq!(result.stats.stalled_iterations, 12);
    assert_eq!(result.stats.max_stall_streak, 12);
    assert_eq!(result.stats.placement_failures, 12);
    assert_eq!(result.stats.expansions, 0);
    assert!(result.test_cases.is_empty());
    assert_eq!(s.tree().size(), 1);
}

// ========================================
// Reproducibility
// ========================================

#[test]
fn test_seeded_runs_are_reproducible() {
    let a = search(Sidestep(0.5), 42).generate(40);
    let b = search(Sidestep(0.5), 42).generate(40);
    assert_eq!(a, b);
}

// ========================================
// Property tests
// ========================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_search_invariants_hold(
        clearance in 0.05f64..3.0,
        seed in 0u64..1000,
        budget in 1usize..25,
    ) {
        let mut s = search(Sidestep(clearance), seed);
        let result = s.generate(budget);
        assert_tree_invariants(&s);
        prop_assert!(result.test_cases.len() <= budget);
        prop_assert_eq!(result.stats.iterations, budget);
        for tc in &result.test_cases {
            prop_assert!(tc.min_distance().unwrap() <= 1.5);
        }
    }
}
