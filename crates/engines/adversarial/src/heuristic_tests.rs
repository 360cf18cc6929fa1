use super::*;
use std::cell::Cell;
use std::time::Duration;

use game_core::games::nim::{Nim, NimPlayer, NimState, Take};
use game_core::games::tictactoe::{Board, Mark, TicTacToe};
use game_core::games::tree::{Node, Side, TreeGame, TreeState};
use game_core::SearchLimits;

use crate::policy::{DepthCutoff, LimitsCutoff, NeverCutoff};
use crate::search::alphabeta;

fn tree(values: &[f64]) -> TreeGame {
    TreeGame::new(Node::uniform(values, 2))
}

fn neutral(_: &TreeState, _: Side) -> f64 {
    0.5
}

/// Counts how often the engine asks for actions.
struct CountingProblem {
    inner: TreeGame,
    expansions: Cell<u32>,
}

impl GameProblem for CountingProblem {
    type State = TreeState;

    fn initial(&self) -> &TreeState {
        self.inner.initial()
    }

    fn actions(&self, state: &TreeState) -> Vec<usize> {
        self.expansions.set(self.expansions.get() + 1);
        self.inner.actions(state)
    }

    fn utility(&self, state: &TreeState, player: Side) -> Result<f64, GameError> {
        self.inner.utility(state, player)
    }
}

#[test]
fn test_root_cutoff_is_single_evaluation() {
    let problem = CountingProblem {
        inner: tree(&[0.2, 0.9, 0.4, 0.6]),
        expansions: Cell::new(0),
    };
    let calls = Cell::new(0);
    let eval = |_: &TreeState, player: Side| {
        calls.set(calls.get() + 1);
        assert_eq!(player, Side::Max);
        0.42
    };

    let outcome =
        heuristic_alphabeta(&problem, problem.initial(), &eval, &DepthCutoff(0), None).unwrap();

    assert_eq!(outcome.value(), 0.42);
    assert!(outcome.best_move().is_none());
    assert_eq!(calls.get(), 1);
    assert_eq!(problem.expansions.get(), 0);
    assert_eq!(outcome.stats.nodes_visited, 1);
    assert_eq!(outcome.stats.max_depth_reached, 0);
}

#[test]
fn test_expired_clock_cuts_off_at_root() {
    let game = tree(&[0.2, 0.9, 0.4, 0.6]);
    let cutoff = LimitsCutoff(SearchLimits::time(Duration::ZERO));
    let (best, stats) =
        heuristic_alphabeta_search(&game, game.initial(), &neutral, &cutoff, None).unwrap();

    assert!(best.is_none());
    assert_eq!(stats.nodes_visited, 1);
}

#[test]
fn test_terminal_checked_before_cutoff() {
    let game = TreeGame::new(Node::Leaf(0.9));
    let outcome =
        heuristic_alphabeta(&game, game.initial(), &neutral, &DepthCutoff(0), None).unwrap();
    assert_eq!(outcome.value(), 0.9);
    assert!(outcome.best_move().is_none());
}

#[test]
fn test_depth_one_cutoff_evaluates_children() {
    let game = tree(&[0.2, 0.9, 0.4, 0.6]);
    let eval = |state: &TreeState, _: Side| if state.path() == [1] { 0.8 } else { 0.3 };

    let outcome =
        heuristic_alphabeta(&game, game.initial(), &eval, &DepthCutoff(1), None).unwrap();

    assert_eq!(outcome.best_move(), Some(&1));
    assert_eq!(outcome.value(), 0.8);
    assert_eq!(outcome.stats.nodes_visited, 3);
    assert_eq!(outcome.stats.max_depth_reached, 1);
}

#[test]
fn test_never_cutoff_matches_alphabeta() {
    for leaves in [
        [0.2, 0.9, 0.4, 0.6],
        [0.4, 0.6, 0.2, 0.9],
        [0.9, 0.2, 0.4, 0.6],
        [0.5, 0.5, 0.5, 0.5],
    ] {
        let game = tree(&leaves);
        let exhaustive = alphabeta(&game, game.initial()).unwrap();
        let heuristic =
            heuristic_alphabeta(&game, game.initial(), &neutral, &NeverCutoff, None).unwrap();

        assert_eq!(heuristic.best_move(), exhaustive.best_move(), "{leaves:?}");
        assert_eq!(heuristic.value(), exhaustive.value());
        assert_eq!(heuristic.stats, exhaustive.stats);
    }

    let board = Board::from_layout("X...O....").unwrap();
    let game = TicTacToe::from_board(board.clone());
    let no_eval = |_: &Board, _: Mark| -> f64 { unreachable!("cutoff never fires") };
    let exhaustive = alphabeta(&game, &board).unwrap();
    let heuristic = heuristic_alphabeta(&game, &board, &no_eval, &NeverCutoff, None).unwrap();
    assert_eq!(heuristic.best_move(), exhaustive.best_move());
    assert_eq!(heuristic.value(), exhaustive.value());
}

fn reverse(_: &TreeState, mut actions: Vec<usize>) -> Vec<usize> {
    actions.reverse();
    actions
}

fn reversed() -> Option<&'static dyn MoveOrdering<TreeState>> {
    Some(&reverse)
}

#[test]
fn test_ordering_changes_tie_break_not_value() {
    let game = TreeGame::new(Node::branch([Node::Leaf(0.5), Node::Leaf(0.5)]));

    let natural =
        heuristic_alphabeta(&game, game.initial(), &neutral, &NeverCutoff, None).unwrap();
    let ordered = heuristic_alphabeta(
        &game,
        game.initial(),
        &neutral,
        &NeverCutoff,
        reversed(),
    )
    .unwrap();

    assert_eq!(natural.best_move(), Some(&0));
    assert_eq!(ordered.best_move(), Some(&1));
    assert_eq!(natural.value(), ordered.value());
}

#[test]
fn test_ordering_improves_pruning() {
    // Natural order finds the strong second subtree last; reversed finds it first
    let game = tree(&[0.2, 0.1, 0.6, 0.7]);

    let natural =
        heuristic_alphabeta(&game, game.initial(), &neutral, &NeverCutoff, None).unwrap();
    let ordered = heuristic_alphabeta(
        &game,
        game.initial(),
        &neutral,
        &NeverCutoff,
        reversed(),
    )
    .unwrap();

    assert_eq!(natural.best_move(), Some(&1));
    assert_eq!(ordered.best_move(), Some(&1));
    assert_eq!(natural.value(), 0.6);
    assert_eq!(ordered.value(), 0.6);
    assert_eq!(natural.stats.pruning_count, 0);
    assert_eq!(ordered.stats.pruning_count, 1);
    assert!(ordered.stats.nodes_visited < natural.stats.nodes_visited);
}

/// Nim positions with zero nim-sum are lost for the side to move.
fn nim_sum_eval(state: &NimState, player: NimPlayer) -> f64 {
    let mover_losing = state.nim_sum() == 0;
    let player_to_move = state.current_player() == player;
    if mover_losing == player_to_move {
        0.05
    } else {
        0.95
    }
}

#[test]
fn test_nim_depth_one_finds_winning_move() {
    let game = Nim::new(vec![3, 4, 5]);
    let (best, stats) = heuristic_alphabeta_search(
        &game,
        game.initial(),
        &nim_sum_eval,
        &DepthCutoff(1),
        None,
    )
    .unwrap();

    assert_eq!(best, Some(Take { heap: 0, count: 2 }));
    assert_eq!(stats.max_depth_reached, 1);
}

#[test]
fn test_ordering_errors_propagate() {
    let game = Nim::new(vec![2]);
    let invent = |_: &NimState, mut actions: Vec<Take>| {
        actions.insert(0, Take { heap: 7, count: 1 });
        actions
    };
    let invent: &dyn MoveOrdering<NimState> = &invent;
    let err = heuristic_alphabeta_search(
        &game,
        game.initial(),
        &nim_sum_eval,
        &DepthCutoff(2),
        Some(invent),
    )
    .unwrap_err();
    assert!(matches!(err, GameError::IllegalMove { .. }));
}
