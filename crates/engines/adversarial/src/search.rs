//! Exhaustive minimax and alpha-beta search.
//!
//! Both recurse to terminal states with no depth limit, so they need a finite
//! game tree. The searching player is fixed at the root and every value is
//! reported from that player's perspective, even at nodes where the opponent
//! is to move. Ties keep the first-seen action.

use game_core::{
    AdversarialSearchResult, GameError, GameProblem, GameState, MoveOf, PlayerOf, SearchClock,
    SearchOutcome, SearchStatistics,
};
use log::{debug, trace};

/// Legal moves of a non-terminal state.
///
/// # Panics
/// If the adapter reports no legal moves for a state that is not over.
pub(crate) fn expand<P: GameProblem>(problem: &P, state: &P::State) -> Vec<MoveOf<P>> {
    let actions = problem.actions(state);
    assert!(
        !actions.is_empty(),
        "non-terminal state has no legal moves: {state}"
    );
    actions
}

/// Searches the whole game tree with minimax and returns the move to play.
///
/// Returns `Ok(None)` when `state` is already terminal.
pub fn minimax_search<P: GameProblem>(
    problem: &P,
    state: &P::State,
) -> Result<Option<MoveOf<P>>, GameError> {
    Ok(minimax(problem, state)?.into_move())
}

/// Minimax with the root value and node statistics.
pub fn minimax<P: GameProblem>(
    problem: &P,
    state: &P::State,
) -> Result<SearchOutcome<MoveOf<P>>, GameError> {
    let clock = SearchClock::start();
    let player = state.current_player();
    let mut stats = SearchStatistics::new();

    let result = minimax_max(problem, state, player, 0, &mut stats)?;

    let elapsed = clock.elapsed();
    debug!(
        "minimax: value {:.3}, {} nodes, depth {}, {:?}",
        result.value, stats.nodes_visited, stats.max_depth_reached, elapsed
    );
    Ok(SearchOutcome {
        result,
        stats,
        elapsed,
    })
}

fn minimax_max<P: GameProblem>(
    problem: &P,
    state: &P::State,
    player: PlayerOf<P>,
    depth: u32,
    stats: &mut SearchStatistics,
) -> Result<AdversarialSearchResult<MoveOf<P>>, GameError> {
    stats.visit(depth);
    if problem.is_terminal(state) {
        return Ok(AdversarialSearchResult::leaf(problem.utility(state, player)?));
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_move = None;

    for action in expand(problem, state) {
        let child = problem.result(state, &action)?;
        let value = minimax_min(problem, &child, player, depth + 1, stats)?.value;
        if value > best_value {
            best_value = value;
            best_move = Some(action);
        }
    }

    Ok(AdversarialSearchResult {
        value: best_value,
        best_move,
    })
}

fn minimax_min<P: GameProblem>(
    problem: &P,
    state: &P::State,
    player: PlayerOf<P>,
    depth: u32,
    stats: &mut SearchStatistics,
) -> Result<AdversarialSearchResult<MoveOf<P>>, GameError> {
    stats.visit(depth);
    if problem.is_terminal(state) {
        return Ok(AdversarialSearchResult::leaf(problem.utility(state, player)?));
    }

    let mut best_value = f64::INFINITY;
    let mut best_move = None;

    for action in expand(problem, state) {
        let child = problem.result(state, &action)?;
        let value = minimax_max(problem, &child, player, depth + 1, stats)?.value;
        if value < best_value {
            best_value = value;
            best_move = Some(action);
        }
    }

    Ok(AdversarialSearchResult {
        value: best_value,
        best_move,
    })
}

/// Searches the whole game tree with alpha-beta pruning and returns the move
/// to play.
///
/// Chooses exactly the move minimax chooses; pruning only skips subtrees that
/// cannot change the outcome.
pub fn alphabeta_search<P: GameProblem>(
    problem: &P,
    state: &P::State,
) -> Result<Option<MoveOf<P>>, GameError> {
    Ok(alphabeta(problem, state)?.into_move())
}

/// Alpha-beta with the root value and node/prune statistics.
pub fn alphabeta<P: GameProblem>(
    problem: &P,
    state: &P::State,
) -> Result<SearchOutcome<MoveOf<P>>, GameError> {
    let clock = SearchClock::start();
    let player = state.current_player();
    let mut stats = SearchStatistics::new();

    let result = alphabeta_max(
        problem,
        state,
        player,
        f64::NEG_INFINITY,
        f64::INFINITY,
        0,
        &mut stats,
    )?;

    let elapsed = clock.elapsed();
    debug!(
        "alphabeta: value {:.3}, {} nodes, {} prunes, depth {}, {:?}",
        result.value, stats.nodes_visited, stats.pruning_count, stats.max_depth_reached, elapsed
    );
    Ok(SearchOutcome {
        result,
        stats,
        elapsed,
    })
}

fn alphabeta_max<P: GameProblem>(
    problem: &P,
    state: &P::State,
    player: PlayerOf<P>,
    mut alpha: f64,
    beta: f64,
    depth: u32,
    stats: &mut SearchStatistics,
) -> Result<AdversarialSearchResult<MoveOf<P>>, GameError> {
    stats.visit(depth);
    if problem.is_terminal(state) {
        return Ok(AdversarialSearchResult::leaf(problem.utility(state, player)?));
    }

    let mut best_value = f64::NEG_INFINITY;
    let mut best_move = None;

    for action in expand(problem, state) {
        let child = problem.result(state, &action)?;
        let value = alphabeta_min(problem, &child, player, alpha, beta, depth + 1, stats)?.value;
        if value > best_value {
            best_value = value;
            best_move = Some(action);
            alpha = alpha.max(best_value);
        }

        if alpha >= beta {
            // Beta cutoff: the minimizer above already has something better
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

fn alphabeta_min<P: GameProblem>(
    problem: &P,
    state: &P::State,
    player: PlayerOf<P>,
    alpha: f64,
    mut beta: f64,
    depth: u32,
    stats: &mut SearchStatistics,
) -> Result<AdversarialSearchResult<MoveOf<P>>, GameError> {
    stats.visit(depth);
    if problem.is_terminal(state) {
        return Ok(AdversarialSearchResult::leaf(problem.utility(state, player)?));
    }

    let mut best_value = f64::INFINITY;
    let mut best_move = None;

    for action in expand(problem, state) {
        let child = problem.result(state, &action)?;
        let value = alphabeta_max(problem, &child, player, alpha, beta, depth + 1, stats)?.value;
        if value < best_value {
            best_value = value;
            best_move = Some(action);
            beta = beta.min(best_value);
        }

        if alpha >= beta {
            // Alpha cutoff
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

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
