//! Noughts and crosses on a 3x3 board.
//!
//! Cells are indexed 0..9 row by row; a move is the index of an empty cell.
//! X moves first.

use std::fmt;

use crate::error::GameError;
use crate::game::{terminal_utility, GameProblem, GameState, Outcome};

/// All eight winning lines
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; 9],
    to_move: Mark,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            to_move: Mark::X,
        }
    }

    /// Parses nine cells written row by row with `X`, `O` and `.` for empty.
    ///
    /// The side to move follows from the counts: X when they are equal, O
    /// when X is one ahead. Returns None for any other shape.
    pub fn from_layout(layout: &str) -> Option<Self> {
        let mut cells = [None; 9];
        let mut count = 0;
        for (i, c) in layout.chars().enumerate() {
            if i >= 9 {
                return None;
            }
            cells[i] = match c.to_ascii_uppercase() {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' | '-' => None,
                _ => return None,
            };
            count = i + 1;
        }
        if count != 9 {
            return None;
        }

        let xs = cells.iter().filter(|c| **c == Some(Mark::X)).count();
        let os = cells.iter().filter(|c| **c == Some(Mark::O)).count();
        let to_move = match xs.checked_sub(os)? {
            0 => Mark::X,
            1 => Mark::O,
            _ => return None,
        };
        Some(Self { cells, to_move })
    }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn line_winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in cells {
                write!(f, "{}", cell.map_or('.', Mark::symbol))?;
            }
        }
        Ok(())
    }
}

impl GameState for Board {
    type Move = usize;
    type Player = Mark;

    fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        (0..9).filter(|&i| self.cells[i].is_none()).collect()
    }

    fn make_move(mut self, mv: &usize) -> Result<Self, GameError> {
        if self.is_over() || *mv >= 9 || self.cells[*mv].is_some() {
            return Err(GameError::illegal_move(mv, &self));
        }
        self.cells[*mv] = Some(self.to_move);
        self.to_move = self.to_move.other();
        Ok(self)
    }

    fn is_over(&self) -> bool {
        self.line_winner().is_some() || self.is_full()
    }

    fn current_player(&self) -> Mark {
        self.to_move
    }

    fn winner(&self) -> Outcome<Mark> {
        match self.line_winner() {
            Some(mark) => Outcome::Winner(mark),
            None if self.is_full() => Outcome::Draw,
            None => Outcome::Undecided,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TicTacToe {
    initial: Board,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_board(board: Board) -> Self {
        Self { initial: board }
    }
}

impl GameProblem for TicTacToe {
    type State = Board;

    fn initial(&self) -> &Board {
        &self.initial
    }

    fn utility(&self, state: &Board, player: Mark) -> Result<f64, GameError> {
        terminal_utility(state, player)
    }
}

#[cfg(test)]
#[path = "tictactoe_tests.rs"]
mod tictactoe_tests;
