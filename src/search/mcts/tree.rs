//! Arena-backed search tree.
//!
//! Nodes live in a `Vec` indexed by [`NodeId`]. Pruning detaches a node
//! from its parent but keeps it in the arena, so ids stay stable and a
//! detached node can still be inspected.

use std::ops::{Index, IndexMut};

use super::node::{Node, NodeId};
use crate::scenario::ScenarioState;

/// The search tree structure
#[derive(Debug)]
pub struct SearchTree {
    /// All nodes indexed by NodeId, detached ones included
    nodes: Vec<Node>,
    /// Root node id
    pub(crate) root_id: NodeId,
}

impl SearchTree {
    /// Create a new search tree with the given root state
    #[must_use]
    pub fn new(root_state: ScenarioState) -> Self {
        Self { nodes: vec![Node::root(root_state)], root_id: NodeId::new(0) }
    }

    /// Root node id
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root_id
    }

    /// Get the root node
    #[must_use]
    pub fn root(&self) -> &Node {
        &self[self.root_id]
    }

    /// Get a node by id
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable node by id
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Add a child node with the next sequential id
    pub fn add_child(&mut self, parent_id: NodeId, state: ScenarioState) -> NodeId {
        let child_id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::child(child_id, state, parent_id));
        if let Some(parent) = self.nodes.get_mut(parent_id.0) {
            parent.children.push(child_id);
        }
        child_id
    }

    /// Detach `id` from its parent and clear its parent link.
    ///
    /// Returns false for the root, which cannot be detached.
    pub fn detach(&mut self, id: NodeId) -> bool {
        if id == self.root_id {
            return false;
        }
        let Some(parent_id) = self.nodes.get_mut(id.0).and_then(|n| n.parent.take()) else {
            return false;
        };
        if let Some(parent) = self.nodes.get_mut(parent_id.0) {
            parent.children.retain(|&c| c != id);
        }
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.pruned = true;
        }
        true
    }

    /// Get number of nodes ever created
    #[must_use]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Get all children of a node
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<&Node> {
        self.nodes
            .get(id.0)
            .map(|n| n.children.iter().filter_map(|&cid| self.get(cid)).collect())
            .unwrap_or_default()
    }

    /// Ids reachable from the root, in depth-first order
    #[must_use]
    pub fn reachable(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root_id];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.get(id) {
                stack.extend(node.children.iter().rev());
            }
        }
        order
    }
}

impl Index<NodeId> for SearchTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for SearchTree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{Obstacle, Position, ScenarioConfig, Size};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn state(n: usize) -> ScenarioState {
        let obstacles = (0..n).map(|i| {
            Obstacle::new(
                Size { l: 1.0, w: 1.0, h: 25.0 },
                Position { x: i as f64, y: 20.0, z: 0.0, r: 0.0 },
            )
        });
        ScenarioState::from_obstacles(obstacles, Arc::new(ScenarioConfig::default()))
    }

    #[test]
    fn test_search_tree_creation() {
        let tree = SearchTree::new(state(0));
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.root().id, NodeId::new(0));
        assert_eq!(tree.reachable(), vec![NodeId::new(0)]);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut tree = SearchTree::new(state(0));
        let a = tree.add_child(NodeId::new(0), state(1));
        let b = tree.add_child(a, state(2));
        let c = tree.add_child(NodeId::new(0), state(1));
        assert_eq!((a, b, c), (NodeId::new(1), NodeId::new(2), NodeId::new(3)));
        assert_eq!(tree.children(NodeId::new(0)).len(), 2);
        assert_eq!(tree.reachable(), vec![NodeId::new(0), a, b, c]);
    }

    #[test]
    fn test_detach_removes_subtree_from_walk() {
        let mut tree = SearchTree::new(state(0));
        let a = tree.add_child(NodeId::new(0), state(1));
        let b = tree.add_child(a, state(2));
        let c = tree.add_child(NodeId::new(0), state(1));

        assert!(tree.detach(a));
        assert_eq!(tree[a].parent, None);
        assert!(tree[a].pruned);
        assert_eq!(tree.root().children, vec![c]);
        assert_eq!(tree.reachable(), vec![NodeId::new(0), c]);
        // Still in the arena.
        assert_eq!(tree[b].parent, Some(a));
        assert_eq!(tree.size(), 4);
        // Second detach is a no-op.
        assert!(!tree.detach(a));
    }

    #[test]
    fn test_root_cannot_be_detached() {
        let mut tree = SearchTree::new(state(0));
        assert!(!tree.detach(NodeId::new(0)));
        assert!(!tree.root().pruned);
    }

    proptest! {
        #[test]
        fn test_tree_size_counts_every_child(num_children in 1usize..20) {
            let mut tree = SearchTree::new(state(0));
            for i in 0..num_children {
                let id = tree.add_child(NodeId::new(0), state(1));
                prop_assert_eq!(id.value(), i + 1);
            }
            prop_assert_eq!(tree.size(), num_children + 1);
            prop_assert_eq!(tree.reachable().len(), num_children + 1);
        }
    }
}
