//! Game Core
//!
//! The capability interfaces every two-player, zero-sum, perfect-information
//! game implements so the search engines can play it without knowing its rules:
//! - [`GameState`]: one position, its legal moves and how moves apply
//! - [`GameProblem`]: the rules object wrapping an initial state and scoring
//!   terminal states
//!
//! Alongside the interfaces live the value types the engines exchange with
//! their callers ([`AdversarialSearchResult`], [`SearchStatistics`]), the
//! search clock and limits, the [`Engine`] trait, and a few small reference
//! games under [`games`].

pub mod engine;
pub mod error;
pub mod game;
pub mod games;
pub mod search;
pub mod time_control;

pub use engine::*;
pub use error::GameError;
pub use game::*;
pub use search::*;
pub use time_control::*;
