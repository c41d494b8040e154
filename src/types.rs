//! Core domain types for Reversi.

use serde::{Deserialize, Serialize};

/// A playing side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Black moves first.
    Black,
    /// White moves second.
    White,
}

impl Player {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a piece of the given side.
    Occupied(Player),
}

impl Square {
    /// Returns the square with its piece flipped to the opposing side.
    ///
    /// Total over all variants: `Empty` maps to itself. Legality never
    /// consults the empty case; it exists so callers need no partiality.
    pub fn flipped(self) -> Self {
        match self {
            Square::Occupied(player) => Square::Occupied(player.opponent()),
            Square::Empty => Square::Empty,
        }
    }

    /// Checks whether the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// Kind of game session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameMode {
    /// Two humans alternating at the same board.
    TwoPlayer,
    /// Black is human, White is the computer opponent.
    VsComputer,
}
