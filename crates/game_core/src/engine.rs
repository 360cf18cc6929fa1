// =============================================================================
// Engine trait: implemented by every move chooser (exhaustive, heuristic, random)
// =============================================================================

use std::time::Duration;

use crate::error::GameError;
use crate::game::{GameProblem, MoveOf};
use crate::search::{SearchOutcome, SearchStatistics};
use crate::time_control::SearchLimits;

/// Result of an engine's search
#[derive(Debug, Clone)]
pub struct EngineResult<M> {
    /// The move chosen (None if the state is terminal or the root was cut off)
    pub best_move: Option<M>,
    /// Value of the root from the engine's perspective
    pub score: f64,
    /// Deepest ply visited
    pub depth: u32,
    /// Node, prune and depth counters for this search
    pub stats: SearchStatistics,
    pub elapsed: Duration,
}

impl<M> From<SearchOutcome<M>> for EngineResult<M> {
    fn from(outcome: SearchOutcome<M>) -> Self {
        Self {
            score: outcome.result.value,
            depth: outcome.stats.max_depth_reached,
            stats: outcome.stats,
            elapsed: outcome.elapsed,
            best_move: outcome.result.best_move,
        }
    }
}

/// Trait that all engines must implement.
///
/// This allows swapping between exhaustive searches, depth/time bounded
/// heuristic searches and the random baseline behind one interface.
pub trait Engine<P: GameProblem> {
    /// Search the state with the given search limits.
    ///
    /// # Arguments
    /// * `problem` - The rules of the game being played
    /// * `state` - The current state to analyze
    /// * `limits` - Search limits (depth, time); exhaustive engines ignore them
    ///
    /// # Returns
    /// EngineResult containing best move, score, and statistics. Adapter
    /// errors are propagated, never swallowed.
    fn search(
        &mut self,
        problem: &P,
        state: &P::State,
        limits: &SearchLimits,
    ) -> Result<EngineResult<MoveOf<P>>, GameError>;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "adversarial-search"
    }

    /// Reset internal state for a new game (running totals and the like)
    fn new_game(&mut self) {}
}
