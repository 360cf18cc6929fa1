//! Game abstraction shared by every adapter and every engine.

use std::fmt::{Debug, Display};

use crate::error::GameError;

/// Utility of a terminal state won by the player asked about.
pub const UTILITY_WIN: f64 = 1.0;
/// Utility of a drawn terminal state, for either player.
pub const UTILITY_DRAW: f64 = 0.5;
/// Utility of a terminal state lost by the player asked about.
pub const UTILITY_LOSS: f64 = 0.0;

/// How a game stands, as reported by [`GameState::winner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome<P> {
    /// The game is still in progress.
    Undecided,
    Draw,
    Winner(P),
}

impl<P> Outcome<P> {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

/// One position of a two-player game.
///
/// `Clone` is the independent copy: mutating a clone never affects the
/// original. `Display` is a human-readable rendering used for debugging and
/// error messages only.
pub trait GameState: Clone + Display {
    type Move: Clone + PartialEq + Debug;
    type Player: Copy + Eq + Debug;

    /// Legal moves from this state, in the adapter's enumeration order.
    ///
    /// The order decides tie-breaks and pruning yield. A non-terminal state
    /// must always have at least one legal move.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies `mv` and returns the resulting state.
    ///
    /// Consumes the handle; callers rely only on the returned one. Fails with
    /// [`GameError::IllegalMove`] if `mv` is not currently legal.
    fn make_move(self, mv: &Self::Move) -> Result<Self, GameError>;

    fn is_over(&self) -> bool;

    /// The player whose turn it is.
    fn current_player(&self) -> Self::Player;

    fn winner(&self) -> Outcome<Self::Player>;
}

/// The rules of a game: an initial state plus a utility for terminal states.
///
/// `actions`, `result` and `is_terminal` delegate to the state by default;
/// adapters only have to supply `initial` and `utility`.
pub trait GameProblem {
    type State: GameState;

    fn initial(&self) -> &Self::State;

    fn actions(&self, state: &Self::State) -> Vec<<Self::State as GameState>::Move> {
        state.legal_moves()
    }

    /// Applies `mv` to a copy of `state`. The parent state is never mutated
    /// and the returned state is owned by the caller.
    fn result(
        &self,
        state: &Self::State,
        mv: &<Self::State as GameState>::Move,
    ) -> Result<Self::State, GameError> {
        state.clone().make_move(mv)
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.is_over()
    }

    /// Value of a terminal `state` for `player`, in [0.0, 1.0].
    ///
    /// For two players the utilities are complementary:
    /// `utility(s, a) + utility(s, b) == 1.0`. Fails with
    /// [`GameError::InvalidState`] on a non-terminal state.
    fn utility(
        &self,
        state: &Self::State,
        player: <Self::State as GameState>::Player,
    ) -> Result<f64, GameError>;
}

/// Move type of a problem's states.
pub type MoveOf<P> = <<P as GameProblem>::State as GameState>::Move;
/// Player type of a problem's states.
pub type PlayerOf<P> = <<P as GameProblem>::State as GameState>::Player;

/// Maps an outcome to the win/draw/loss utility convention.
///
/// Returns `None` while the game is undecided.
pub fn outcome_utility<P: Eq>(outcome: Outcome<P>, player: P) -> Option<f64> {
    match outcome {
        Outcome::Undecided => None,
        Outcome::Draw => Some(UTILITY_DRAW),
        Outcome::Winner(winner) if winner == player => Some(UTILITY_WIN),
        Outcome::Winner(_) => Some(UTILITY_LOSS),
    }
}

/// Utility of `state` for `player` under the win/draw/loss convention.
///
/// Rejects states that are not over with [`GameError::InvalidState`].
pub fn terminal_utility<S: GameState>(state: &S, player: S::Player) -> Result<f64, GameError> {
    if !state.is_over() {
        return Err(GameError::invalid_state(state));
    }
    outcome_utility(state.winner(), player).ok_or_else(|| GameError::invalid_state(state))
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
