//! Undo history: immutable pre-move snapshots.

use crate::board::Board;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A pre-move snapshot: the board together with the side that was to
/// move at that point.
///
/// Carrying the side alongside the board is what makes undo well-defined
/// across pass-skip sequences: restoring never has to guess whose turn it
/// was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// The board before the move was applied.
    board: Board,
    /// The side that was to move.
    to_move: Player,
}

impl Snapshot {
    /// Creates a snapshot of the given position.
    pub fn new(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// Consumes the snapshot, yielding its parts.
    pub fn into_parts(self) -> (Board, Player) {
        (self.board, self.to_move)
    }
}

/// Stack of snapshots, most-recent-last.
///
/// Grows by one entry per successfully applied move; a full game can
/// produce at most 60 moves, so the stack is effectively bounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Pops the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Checks whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Discards all snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_is_lifo() {
        let mut history = History::new();
        history.push(Snapshot::new(Board::new(), Player::Black));

        let mut second = Board::new();
        second.make_move(2, 4, Player::Black);
        history.push(Snapshot::new(second.clone(), Player::White));

        let top = history.pop().expect("two snapshots pushed");
        assert_eq!(top.board(), &second);
        assert_eq!(*top.to_move(), Player::White);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_pop_empty_is_none() {
        let mut history = History::new();
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_snapshots_are_independent_of_live_board() {
        let mut live = Board::new();
        let mut history = History::new();
        history.push(Snapshot::new(live.clone(), Player::Black));

        live.make_move(2, 4, Player::Black);

        let snap = history.pop().expect("one snapshot pushed");
        assert_eq!(snap.board(), &Board::new());
    }
}
