//! Explicit game trees.
//!
//! Every leaf carries the utility for the first player (`Side::Max`), the
//! players alternate by ply, and a move is the index of the child to descend
//! into. Handy for hand-computed scenarios where the exact search result is
//! known in advance.

use std::fmt;
use std::sync::Arc;

use crate::error::GameError;
use crate::game::{GameProblem, GameState, Outcome, UTILITY_DRAW};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal position with the utility for `Side::Max`
    Leaf(f64),
    Branch(Vec<Node>),
}

impl Node {
    pub fn branch(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Branch(children.into_iter().collect())
    }

    /// Builds a uniform tree whose leaves, left to right, are `values`.
    ///
    /// Leaves are grouped `branching` at a time, level by level, until one
    /// root remains; a short final group becomes a narrower branch.
    pub fn uniform(values: &[f64], branching: usize) -> Self {
        assert!(branching >= 2, "branching factor must be at least 2");
        assert!(!values.is_empty(), "a tree needs at least one leaf");

        let mut level: Vec<Node> = values.iter().copied().map(Node::Leaf).collect();
        while level.len() > 1 {
            level = level
                .chunks(branching)
                .map(|chunk| Node::Branch(chunk.to_vec()))
                .collect();
        }
        level.swap_remove(0)
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(children) => 1 + children.iter().map(Node::node_count).sum::<usize>(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Branch(children) => children.iter().map(Node::leaf_count).sum(),
        }
    }

    /// Longest path from this node to a leaf, in plies.
    pub fn height(&self) -> u32 {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(children) => 1 + children.iter().map(Node::height).max().unwrap_or(0),
        }
    }
}

/// The two players of a tree game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Moves at even plies; leaf values are its utilities
    Max,
    Min,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

/// A position in a tree game: the shared tree plus the path taken so far.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeState {
    root: Arc<Node>,
    path: Vec<usize>,
}

impl TreeState {
    pub fn new(root: Node) -> Self {
        Self {
            root: Arc::new(root),
            path: Vec::new(),
        }
    }

    /// Child indices taken from the root to reach this position.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn node(&self) -> &Node {
        let mut node = self.root.as_ref();
        for &index in &self.path {
            match node {
                Node::Branch(children) => node = &children[index],
                Node::Leaf(_) => break,
            }
        }
        node
    }

    /// Leaf utility for `Side::Max`, if this position is a leaf.
    pub fn leaf_value(&self) -> Option<f64> {
        match self.node() {
            Node::Leaf(value) => Some(*value),
            Node::Branch(_) => None,
        }
    }
}

impl fmt::Display for TreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for index in &self.path {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

impl GameState for TreeState {
    type Move = usize;
    type Player = Side;

    fn legal_moves(&self) -> Vec<usize> {
        match self.node() {
            Node::Branch(children) => (0..children.len()).collect(),
            Node::Leaf(_) => Vec::new(),
        }
    }

    fn make_move(mut self, mv: &usize) -> Result<Self, GameError> {
        let legal = matches!(self.node(), Node::Branch(children) if *mv < children.len());
        if !legal {
            return Err(GameError::illegal_move(mv, &self));
        }
        self.path.push(*mv);
        Ok(self)
    }

    fn is_over(&self) -> bool {
        matches!(self.node(), Node::Leaf(_))
    }

    fn current_player(&self) -> Side {
        if self.path.len() % 2 == 0 {
            Side::Max
        } else {
            Side::Min
        }
    }

    fn winner(&self) -> Outcome<Side> {
        match self.leaf_value() {
            None => Outcome::Undecided,
            Some(value) if value > UTILITY_DRAW => Outcome::Winner(Side::Max),
            Some(value) if value < UTILITY_DRAW => Outcome::Winner(Side::Min),
            Some(_) => Outcome::Draw,
        }
    }
}

/// Rules object for an explicit tree.
#[derive(Debug, Clone)]
pub struct TreeGame {
    initial: TreeState,
}

impl TreeGame {
    pub fn new(root: Node) -> Self {
        Self {
            initial: TreeState::new(root),
        }
    }
}

impl GameProblem for TreeGame {
    type State = TreeState;

    fn initial(&self) -> &TreeState {
        &self.initial
    }

    /// The leaf value for `Side::Max`, its complement for `Side::Min`.
    fn utility(&self, state: &TreeState, player: Side) -> Result<f64, GameError> {
        let value = state
            .leaf_value()
            .ok_or_else(|| GameError::invalid_state(state))?;
        Ok(match player {
            Side::Max => value,
            Side::Min => 1.0 - value,
        })
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
