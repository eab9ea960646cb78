//! Persistent, append-only obstacle sequence.
//!
//! Every search state owns a `Scenario`, and child states differ from
//! their parent by one appended or one replaced trailing obstacle. The
//! sequence is stored as a shared linked list so those transitions reuse
//! the parent's prefix instead of copying it.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use super::obstacle::{Obstacle, ObstacleKey};

#[derive(Debug)]
struct Link {
    obstacle: Obstacle,
    prev: Option<Arc<Link>>,
    len: usize,
}

/// An ordered obstacle sequence, in placement order
#[derive(Clone, Default)]
pub struct Scenario {
    head: Option<Arc<Link>>,
}

impl Scenario {
    /// The empty scenario
    #[must_use]
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Number of obstacles
    #[must_use]
    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |link| link.len)
    }

    /// True when no obstacle has been placed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The most recently placed obstacle
    #[must_use]
    pub fn last(&self) -> Option<&Obstacle> {
        self.head.as_deref().map(|link| &link.obstacle)
    }

    /// A new scenario with `obstacle` appended
    #[must_use]
    pub fn pushed(&self, obstacle: Obstacle) -> Self {
        let len = self.len() + 1;
        Self { head: Some(Arc::new(Link { obstacle, prev: self.head.clone(), len })) }
    }

    /// A new scenario without the most recent obstacle
    #[must_use]
    pub fn without_last(&self) -> Self {
        Self { head: self.head.as_ref().and_then(|link| link.prev.clone()) }
    }

    /// A new scenario with the most recent obstacle swapped for `obstacle`
    #[must_use]
    pub fn with_last_replaced(&self, obstacle: Obstacle) -> Self {
        self.without_last().pushed(obstacle)
    }

    /// Obstacles from most recent to first placed
    pub fn iter_rev(&self) -> impl Iterator<Item = &Obstacle> {
        std::iter::successors(self.head.as_deref(), |link| link.prev.as_deref())
            .map(|link| &link.obstacle)
    }

    /// Obstacles in placement order
    #[must_use]
    pub fn to_vec(&self) -> Vec<Obstacle> {
        let mut obstacles: Vec<Obstacle> = self.iter_rev().copied().collect();
        obstacles.reverse();
        obstacles
    }

    fn key_set(&self) -> BTreeSet<ObstacleKey> {
        self.iter_rev().map(Obstacle::key).collect()
    }
}

/// Scenarios compare as obstacle sets: placement order is ignored.
impl PartialEq for Scenario {
    fn eq(&self, other: &Self) -> bool {
        self.key_set() == other.key_set()
    }
}

impl FromIterator<Obstacle> for Scenario {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |scenario, ob| scenario.pushed(ob))
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}
