//! Errors raised by game adapters.
//!
//! The engines never catch these; an adapter error surfaces unchanged to
//! whoever started the search.

use std::fmt::{Debug, Display};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    /// A move absent from the state's current legal-move list was applied.
    #[error("illegal move {mv} in position {position}")]
    IllegalMove { mv: String, position: String },

    /// A terminal-only query (utility) was made on a game still in progress.
    #[error("state is not terminal: {position}")]
    InvalidState { position: String },
}

impl GameError {
    pub fn illegal_move(mv: &impl Debug, position: &impl Display) -> Self {
        GameError::IllegalMove {
            mv: format!("{mv:?}"),
            position: position.to_string(),
        }
    }

    pub fn invalid_state(position: &impl Display) -> Self {
        GameError::InvalidState {
            position: position.to_string(),
        }
    }
}
