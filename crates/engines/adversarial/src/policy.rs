//! Pluggable policies for the heuristic search: static evaluation, cutoff and
//! move ordering.
//!
//! Each trait has a blanket impl for closures of the matching shape, so a
//! caller can pass `&|state: &S, player| ...` wherever a policy is expected.

use std::cmp::Ordering;
use std::time::Duration;

use game_core::{GameState, SearchLimits};

/// Static evaluator used when a cutoff fires on a non-terminal state.
///
/// Values should live on the same scale as the game's utilities (by
/// convention [0.0, 1.0], higher is better for `player`).
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S, player: S::Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, S::Player) -> f64,
{
    fn evaluate(&self, state: &S, player: S::Player) -> f64 {
        self(state, player)
    }
}

/// Decides whether a non-terminal node is evaluated statically instead of
/// expanded.
///
/// `depth` is the node's ply below the search root; `elapsed` is measured from
/// the single timestamp taken when the search started.
pub trait CutoffTest<S> {
    fn should_cutoff(&self, state: &S, depth: u32, elapsed: Duration) -> bool;
}

impl<S, F> CutoffTest<S> for F
where
    F: Fn(&S, u32, Duration) -> bool,
{
    fn should_cutoff(&self, state: &S, depth: u32, elapsed: Duration) -> bool {
        self(state, depth, elapsed)
    }
}

/// Cut off every node at or below a fixed ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthCutoff(pub u32);

impl<S> CutoffTest<S> for DepthCutoff {
    fn should_cutoff(&self, _state: &S, depth: u32, _elapsed: Duration) -> bool {
        depth >= self.0
    }
}

/// Never cut off: search down to terminal states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverCutoff;

impl<S> CutoffTest<S> for NeverCutoff {
    fn should_cutoff(&self, _state: &S, _depth: u32, _elapsed: Duration) -> bool {
        false
    }
}

/// Cut off on [`SearchLimits`]: depth limit or move time minus buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitsCutoff(pub SearchLimits);

impl<S> CutoffTest<S> for LimitsCutoff {
    fn should_cutoff(&self, _state: &S, depth: u32, elapsed: Duration) -> bool {
        self.0.is_exhausted(depth, elapsed)
    }
}

/// Reorders candidate actions before they are expanded.
///
/// Must return a permutation of `actions`. Ordering changes which of several
/// equal-valued moves is picked and how much gets pruned, never the value of
/// a fully searched subtree.
pub trait MoveOrdering<S: GameState> {
    fn order(&self, state: &S, actions: Vec<S::Move>) -> Vec<S::Move>;
}

impl<S, F> MoveOrdering<S> for F
where
    S: GameState,
    F: Fn(&S, Vec<S::Move>) -> Vec<S::Move>,
{
    fn order(&self, state: &S, actions: Vec<S::Move>) -> Vec<S::Move> {
        self(state, actions)
    }
}

/// Orders actions by a score, highest first.
///
/// The sort is stable, so equally scored actions keep the adapter's order.
#[derive(Debug, Clone, Copy)]
pub struct ScoredOrdering<F>(F);

impl<F> ScoredOrdering<F> {
    pub fn new(score: F) -> Self {
        Self(score)
    }
}

impl<S, F> MoveOrdering<S> for ScoredOrdering<F>
where
    S: GameState,
    F: Fn(&S, &S::Move) -> f64,
{
    fn order(&self, state: &S, actions: Vec<S::Move>) -> Vec<S::Move> {
        let mut scored: Vec<(f64, S::Move)> = actions
            .into_iter()
            .map(|mv| ((self.0)(state, &mv), mv))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.into_iter().map(|(_, mv)| mv).collect()
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
