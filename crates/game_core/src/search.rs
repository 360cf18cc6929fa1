//! Values exchanged between the search engines and their callers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Value of a searched node paired with the move that achieves it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdversarialSearchResult<M> {
    /// Utility or heuristic value from the searching player's perspective
    pub value: f64,
    /// Move to play, `None` when nothing was expanded (terminal or cut off)
    pub best_move: Option<M>,
}

impl<M> AdversarialSearchResult<M> {
    pub fn new(value: f64, best_move: M) -> Self {
        Self {
            value,
            best_move: Some(best_move),
        }
    }

    /// A node whose value was taken without expanding any move.
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            best_move: None,
        }
    }
}

/// Counters accumulated over one top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Max- and min-value calls entered
    pub nodes_visited: u64,
    /// Early returns triggered by `alpha >= beta`
    pub pruning_count: u64,
    /// Deepest ply at which a node was visited (root is 0)
    pub max_depth_reached: u32,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records entry into a node at `depth`.
    #[inline]
    pub fn visit(&mut self, depth: u32) {
        self.nodes_visited += 1;
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    #[inline]
    pub fn prune(&mut self) {
        self.pruning_count += 1;
    }

    /// Folds another search's counters into running totals.
    pub fn merge(&mut self, other: &SearchStatistics) {
        self.nodes_visited += other.nodes_visited;
        self.pruning_count += other.pruning_count;
        self.max_depth_reached = self.max_depth_reached.max(other.max_depth_reached);
    }
}

/// Everything one engine invocation produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome<M> {
    pub result: AdversarialSearchResult<M>,
    pub stats: SearchStatistics,
    /// Wall-clock time spent, measured from the search's own start timestamp
    pub elapsed: Duration,
}

impl<M> SearchOutcome<M> {
    pub fn best_move(&self) -> Option<&M> {
        self.result.best_move.as_ref()
    }

    pub fn value(&self) -> f64 {
        self.result.value
    }

    pub fn into_move(self) -> Option<M> {
        self.result.best_move
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
