//! Small, finite reference games.
//!
//! They exercise the [`GameState`](crate::GameState) and
//! [`GameProblem`](crate::GameProblem) contracts and serve as fixtures for the
//! engines' tests:
//! - [`tree`]: an explicit game tree with hand-picked leaf utilities
//! - [`tictactoe`]: 3x3 noughts and crosses
//! - [`nim`]: normal-play Nim with an optional cap on counters per move

pub mod nim;
pub mod tictactoe;
pub mod tree;
