//! Game session: turn alternation, forced passes, undo, and the
//! command surface consumed by a presentation layer.

use crate::board::Board;
use crate::computer::ComputerPlayer;
use crate::history::{History, Snapshot};
use crate::types::{GameMode, Player, Square};
use rand::rngs::StdRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// A live Reversi session.
///
/// Owns the board, the side to move, the undo history, and the computer
/// opponent. Every command is a silent no-op on misuse, reported through
/// its return value; the engine never panics during play. All operations
/// are synchronous and O(board size) — callers serialize access, and any
/// thinking delay belongs to the presentation layer.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    mode: GameMode,
    computer: ComputerPlayer,
    history: History,
    turn_skipped: bool,
    rng: StdRng,
}

impl Game {
    /// Creates a new session in the opening position, Black to move.
    ///
    /// In `VsComputer` mode the computer plays White. The heuristic's
    /// jitter is seeded from entropy; use [`Game::with_seed`] when
    /// reproducible play is needed.
    pub fn new(mode: GameMode) -> Self {
        Self::from_rng(mode, StdRng::from_entropy())
    }

    /// Creates a new session with a fixed jitter seed.
    ///
    /// Two games with the same seed and the same human moves play out
    /// identically.
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::from_rng(mode, StdRng::seed_from_u64(seed))
    }

    /// Creates a session from an arbitrary mid-game position.
    ///
    /// History starts empty, so undo cannot rewind past the given
    /// position.
    pub fn from_position(mode: GameMode, board: Board, to_move: Player) -> Self {
        let mut game = Self::from_rng(mode, StdRng::from_entropy());
        game.board = board;
        game.to_move = to_move;
        game
    }

    fn from_rng(mode: GameMode, rng: StdRng) -> Self {
        info!(%mode, "new game session");
        Self {
            board: Board::new(),
            to_move: Player::Black,
            mode,
            computer: ComputerPlayer::new(Player::White),
            history: History::new(),
            turn_skipped: false,
            rng,
        }
    }

    /// Resets to the opening position: board restored, history cleared,
    /// skip flag cleared, Black to move. Mode and seed state are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(mode = %self.mode, "restarting game");
        self.board.reset();
        self.history.clear();
        self.to_move = Player::Black;
        self.turn_skipped = false;
    }

    /// Plays a move for the side to move.
    ///
    /// Returns `false` with no state change when the game is over, when
    /// it is the computer's turn, or when the move is illegal. On success
    /// the pre-move position is pushed to history and the turn-switch
    /// protocol runs.
    #[instrument(skip(self))]
    pub fn play_move(&mut self, row: usize, col: usize) -> bool {
        if self.is_game_over() || self.is_computer_turn() {
            return false;
        }
        self.apply_checked(row, col)
    }

    /// Lets the computer take its turn.
    ///
    /// Returns the coordinates it played, or `None` when it is not the
    /// computer's turn, the game is over, or the computer has to pass.
    /// A pass still switches the turn.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self) -> Option<(usize, usize)> {
        if self.mode != GameMode::VsComputer
            || self.to_move != self.computer.player()
            || self.is_game_over()
        {
            return None;
        }

        match self.computer.select_move(&self.board, &mut self.rng) {
            Some((row, col)) => {
                self.apply_checked(row, col);
                Some((row, col))
            }
            None => {
                debug!(player = %self.to_move, "computer passes");
                self.switch_turn();
                None
            }
        }
    }

    /// Takes back the last move.
    ///
    /// Pops one snapshot and restores both its board and its recorded
    /// side to move; in `VsComputer` mode a second snapshot is popped
    /// when available, rewinding over the computer's reply to the
    /// human's previous turn. Returns `false` with no state change when
    /// history is empty.
    ///
    /// The side to move always comes from the restored snapshot, never
    /// from flipping the current side, so undo stays correct across
    /// pass-skip sequences in both modes.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        let snapshot = if self.mode == GameMode::VsComputer {
            self.history.pop().unwrap_or(snapshot)
        } else {
            snapshot
        };

        let (board, to_move) = snapshot.into_parts();
        self.board = board;
        self.to_move = to_move;
        self.turn_skipped = false;
        debug!(to_move = %self.to_move, "undo applied");
        true
    }

    /// Validates, snapshots, applies, and switches the turn.
    ///
    /// Shared path for human and computer moves.
    fn apply_checked(&mut self, row: usize, col: usize) -> bool {
        if !self.board.is_legal_move(row, col, self.to_move) {
            return false;
        }
        self.history
            .push(Snapshot::new(self.board.clone(), self.to_move));
        self.board.make_move(row, col, self.to_move);
        self.turn_skipped = false;
        self.switch_turn();
        true
    }

    /// Turn-switch protocol.
    ///
    /// The opponent moves next if it can; otherwise the skip flag is set
    /// and the mover retains the turn (or, if the mover is also stuck,
    /// the game is terminal — a derived condition, never stored).
    fn switch_turn(&mut self) {
        let next = self.to_move.opponent();
        if self.board.has_any_legal_move(next) {
            self.to_move = next;
            self.turn_skipped = false;
        } else {
            self.turn_skipped = true;
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn side_to_move(&self) -> Player {
        self.to_move
    }

    /// The session's mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The square at the given cell, delegated to the board.
    ///
    /// Out-of-range coordinates read as empty.
    pub fn square(&self, row: usize, col: usize) -> Square {
        self.board.square(row, col)
    }

    /// Piece tally for a side, delegated to the board.
    pub fn count(&self, player: Player) -> u8 {
        self.board.count(player)
    }

    /// Checks whether the game has ended: neither side has a legal move.
    ///
    /// This is the sole terminal condition; full boards and wiped-out
    /// sides end games only because they satisfy it.
    pub fn is_game_over(&self) -> bool {
        Player::iter().all(|player| !self.board.has_any_legal_move(player))
    }

    /// Checks whether it is the computer's turn.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer && self.to_move == self.computer.player()
    }

    /// Consumed-once skip flag: true when the previous turn switch had
    /// to skip a side. Cleared by [`Game::acknowledge_skip`].
    pub fn was_turn_skipped(&self) -> bool {
        self.turn_skipped
    }

    /// Clears the skip flag once the presentation layer has surfaced it.
    pub fn acknowledge_skip(&mut self) {
        self.turn_skipped = false;
    }
}
