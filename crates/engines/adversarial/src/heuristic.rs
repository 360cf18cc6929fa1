//! Depth- and time-bounded alpha-beta with a static evaluator.
//!
//! Same recursion as [`alphabeta`](crate::alphabeta), with three changes at
//! every node:
//! 1. a terminal state returns its utility,
//! 2. otherwise the cutoff test may stop expansion and return the static
//!    evaluation instead,
//! 3. otherwise the (optionally reordered) actions are expanded one ply
//!    deeper.
//!
//! The clock is read once when the search starts; each node's elapsed time is
//! measured from that instant.

use game_core::{
    AdversarialSearchResult, GameError, GameProblem, GameState, MoveOf, PlayerOf, SearchClock,
    SearchOutcome, SearchStatistics,
};
use log::{debug, trace};

use crate::policy::{CutoffTest, Evaluator, MoveOrdering};
use crate::search::expand;

/// Collaborators shared by every node of one heuristic search.
struct HeuristicSearch<'a, P, E: ?Sized, C: ?Sized>
where
    P: GameProblem,
{
    problem: &'a P,
    eval: &'a E,
    cutoff: &'a C,
    order: Option<&'a dyn MoveOrdering<P::State>>,
    clock: SearchClock,
}

/// Heuristic alpha-beta returning the move to play and the search counters.
///
/// The move is `None` when `state` is terminal or the cutoff fires at the
/// root; in the latter case exactly one static evaluation was made.
pub fn heuristic_alphabeta_search<P, E, C>(
    problem: &P,
    state: &P::State,
    eval: &E,
    cutoff: &C,
    order: Option<&dyn MoveOrdering<P::State>>,
) -> Result<(Option<MoveOf<P>>, SearchStatistics), GameError>
where
    P: GameProblem,
    E: Evaluator<P::State> + ?Sized,
    C: CutoffTest<P::State> + ?Sized,
{
    let outcome = heuristic_alphabeta(problem, state, eval, cutoff, order)?;
    Ok((outcome.result.best_move, outcome.stats))
}

/// Heuristic alpha-beta with the root value, counters and elapsed time.
pub fn heuristic_alphabeta<P, E, C>(
    problem: &P,
    state: &P::State,
    eval: &E,
    cutoff: &C,
    order: Option<&dyn MoveOrdering<P::State>>,
) -> Result<SearchOutcome<MoveOf<P>>, GameError>
where
    P: GameProblem,
    E: Evaluator<P::State> + ?Sized,
    C: CutoffTest<P::State> + ?Sized,
{
    let search = HeuristicSearch {
        problem,
        eval,
        cutoff,
        order,
        clock: SearchClock::start(),
    };
    let player = state.current_player();
    let mut stats = SearchStatistics::new();

    let result = search.max_value(
        state,
        player,
        f64::NEG_INFINITY,
        f64::INFINITY,
        0,
        &mut stats,
    )?;

    let elapsed = search.clock.elapsed();
    debug!(
        "heuristic alphabeta: value {:.3}, {} nodes, {} prunes, depth {}, {:?}",
        result.value, stats.nodes_visited, stats.pruning_count, stats.max_depth_reached, elapsed
    );
    Ok(SearchOutcome {
        result,
        stats,
        elapsed,
    })
}

impl<'a, P, E, C> HeuristicSearch<'a, P, E, C>
where
    P: GameProblem,
    E: Evaluator<P::State> + ?Sized,
    C: CutoffTest<P::State> + ?Sized,
{
    /// Terminal utility or cutoff evaluation, if this node is not expanded.
    fn leaf_value(
        &self,
        state: &P::State,
        player: PlayerOf<P>,
        depth: u32,
    ) -> Result<Option<f64>, GameError> {
        if self.problem.is_terminal(state) {
            return self.problem.utility(state, player).map(Some);
        }
        if self.cutoff.should_cutoff(state, depth, self.clock.elapsed()) {
            return Ok(Some(self.eval.evaluate(state, player)));
        }
        Ok(None)
    }

    fn actions(&self, state: &P::State) -> Vec<MoveOf<P>> {
        let actions = expand(self.problem, state);
        match self.order {
            Some(order) => order.order(state, actions),
            None => actions,
        }
    }

    fn max_value(
        &self,
        state: &P::State,
        player: PlayerOf<P>,
        mut alpha: f64,
        beta: f64,
        depth: u32,
        stats: &mut SearchStatistics,
    ) -> Result<AdversarialSearchResult<MoveOf<P>>, GameError> {
        stats.visit(depth);
        if let Some(value) = self.leaf_value(state, player, depth)? {
            return Ok(AdversarialSearchResult::leaf(value));
        }

        let mut best_value = f64::NEG_INFINITY;
        let mut best_move = None;

        for action in self.actions(state) {
            let child = self.problem.result(state, &action)?;
            let value = self
                .min_value(&child, player, alpha, beta, depth + 1, stats)?
                .value;
            if value > best_value {
                best_value = value;
                best_move = Some(action);
                alpha = alpha.max(best_value);
            }

            if alpha >= beta {
                stats.prune();
                trace!("beta cutoff at depth {depth} ({alpha:.3} >= {beta:.3})");
                break;
            }
        }

        Ok(AdversarialSearchResult {
            value: best_value,
            best_move,
        })
    }

    fn min_value(
        &self,
        state: &P::State,
        player: PlayerOf<P>,
        alpha: f64,
        mut beta: f64,
        depth: u32,
        stats: &mut SearchStatistics,
    ) -> Result<AdversarialSearchResult<MoveOf<P>>, GameError> {
        stats.visit(depth);
        if let Some(value) = self.leaf_value(state, player, depth)? {
            return Ok(AdversarialSearchResult::leaf(value));
        }

        let mut best_value = f64::INFINITY;
        let mut best_move = None;

        for action in self.actions(state) {
            let child = self.problem.result(state, &action)?;
            let value = self
                .max_value(&child, player, alpha, beta, depth + 1, stats)?
                .value;
            if value < best_value {
                best_value = value;
                best_move = Some(action);
                beta = beta.min(best_value);
            }

            if alpha >= beta {
                stats.prune();
                trace!("alpha cutoff at depth {depth} ({alpha:.3} >= {beta:.3})");
                break;
            }
        }

        Ok(AdversarialSearchResult {
            value: best_value,
            best_move,
        })
    }
}

#[cfg(test)]
#[path = "heuristic_tests.rs"]
mod heuristic_tests;
