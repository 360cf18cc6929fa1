//! Normal-play Nim: players alternately remove counters from one heap, and
//! whoever takes the last counter wins.

use std::fmt;

use crate::error::GameError;
use crate::game::{terminal_utility, GameProblem, GameState, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NimPlayer {
    First,
    Second,
}

impl NimPlayer {
    pub fn other(self) -> NimPlayer {
        match self {
            NimPlayer::First => NimPlayer::Second,
            NimPlayer::Second => NimPlayer::First,
        }
    }
}

/// Remove `count` counters from heap `heap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Take {
    pub heap: usize,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NimState {
    heaps: Vec<u32>,
    max_take: u32,
    to_move: NimPlayer,
    last_mover: Option<NimPlayer>,
}

impl NimState {
    pub fn new(heaps: Vec<u32>, max_take: u32) -> Self {
        Self {
            heaps,
            max_take,
            to_move: NimPlayer::First,
            last_mover: None,
        }
    }

    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }

    /// XOR of all heap sizes; zero means the side to move loses under
    /// perfect play when moves are uncapped.
    pub fn nim_sum(&self) -> u32 {
        self.heaps.iter().fold(0, |acc, &h| acc ^ h)
    }
}

impl fmt::Display for NimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heaps {:?} | {:?} to move", self.heaps, self.to_move)
    }
}

impl GameState for NimState {
    type Move = Take;
    type Player = NimPlayer;

    /// Heap by heap, smallest take first.
    fn legal_moves(&self) -> Vec<Take> {
        self.heaps
            .iter()
            .enumerate()
            .flat_map(|(heap, &size)| {
                (1..=size.min(self.max_take)).map(move |count| Take { heap, count })
            })
            .collect()
    }

    fn make_move(mut self, mv: &Take) -> Result<Self, GameError> {
        let available = self.heaps.get(mv.heap).copied().unwrap_or(0);
        if mv.count == 0 || mv.count > available || mv.count > self.max_take {
            return Err(GameError::illegal_move(mv, &self));
        }
        self.heaps[mv.heap] -= mv.count;
        self.last_mover = Some(self.to_move);
        self.to_move = self.to_move.other();
        Ok(self)
    }

    fn is_over(&self) -> bool {
        self.heaps.iter().all(|&h| h == 0)
    }

    fn current_player(&self) -> NimPlayer {
        self.to_move
    }

    fn winner(&self) -> Outcome<NimPlayer> {
        if !self.is_over() {
            return Outcome::Undecided;
        }
        // A game that starts with no counters has no last mover.
        match self.last_mover {
            Some(player) => Outcome::Winner(player),
            None => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Nim {
    initial: NimState,
}

impl Nim {
    /// Nim with no cap on how many counters one move may take.
    pub fn new(heaps: Vec<u32>) -> Self {
        Self::with_max_take(heaps, u32::MAX)
    }

    pub fn with_max_take(heaps: Vec<u32>, max_take: u32) -> Self {
        Self {
            initial: NimState::new(heaps, max_take),
        }
    }
}

impl GameProblem for Nim {
    type State = NimState;

    fn initial(&self) -> &NimState {
        &self.initial
    }

    fn utility(&self, state: &NimState, player: NimPlayer) -> Result<f64, GameError> {
        terminal_utility(state, player)
    }
}

#[cfg(test)]
#[path = "nim_tests.rs"]
mod nim_tests;
