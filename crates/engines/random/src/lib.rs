//! Random Move Engine
//!
//! Selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (any search engine should easily beat this)
//! - Driving games to arbitrary positions in tests

use std::time::Instant;

use game_core::{
    Engine, EngineResult, GameError, GameProblem, MoveOf, SearchLimits, SearchStatistics,
    UTILITY_DRAW,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};


/// A uniformly random legal move, drawn from the thread-local generator.
///
/// # Panics
/// If `state` has no legal moves; call this on non-terminal states only.
pub fn choose_random<P: GameProblem>(problem: &P, state: &P::State) -> MoveOf<P> {
    choose_random_with(problem, state, &mut thread_rng())
}

/// Like [`choose_random`], with a caller-supplied generator for reproducible
/// games.
pub fn choose_random_with<P, R>(problem: &P, state: &P::State, rng: &mut R) -> MoveOf<P>
where
    P: GameProblem,
    R: Rng + ?Sized,
{
    let mut actions = problem.actions(state);
    assert!(!actions.is_empty(), "no legal moves to choose from: {state}");
    let index = rng.gen_range(0..actions.len());
    actions.swap_remove(index)
}

/// An engine that plays random legal moves.
///
/// It does no evaluation; the reported score is always a draw.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same moves for the same seed and the same sequence of states.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: GameProblem> Engine<P> for RandomEngine {
    fn search(
        &mut self,
        problem: &P,
        state: &P::State,
        _limits: &SearchLimits,
    ) -> Result<EngineResult<MoveOf<P>>, GameError> {
        let start = Instant::now();
        let mut stats = SearchStatistics::new();
        stats.visit(0);

        let best_move = if problem.is_terminal(state) {
            None
        } else {
            problem.actions(state).choose(&mut self.rng).cloned()
        };

        Ok(EngineResult {
            best_move,
            score: UTILITY_DRAW,
            depth: 0,
            stats,
            elapsed: start.elapsed(),
        })
    }

    fn name(&self) -> &str {
        "Random"
    }
}
