//! Reversi (Othello) rules engine.
//!
//! Pure game logic for an 8x8 capture game: board state and the flipping
//! rule, turn alternation with forced passes, undo history, and a one-ply
//! heuristic computer opponent. No rendering, input handling, or I/O —
//! a presentation layer drives the engine through [`Game`] commands and
//! reads state back through its queries.
//!
//! # Example
//!
//! ```
//! use reversi_engine::{Game, GameMode, Player};
//!
//! let mut game = Game::with_seed(GameMode::VsComputer, 42);
//! assert_eq!(game.side_to_move(), Player::Black);
//!
//! // Black opens; the flip leaves White with a single piece.
//! assert!(game.play_move(2, 4));
//! assert_eq!(game.count(Player::Black), 4);
//! assert_eq!(game.count(Player::White), 1);
//!
//! // White is the computer and replies with a legal move.
//! assert!(game.is_computer_turn());
//! let reply = game.play_computer_move();
//! assert!(reply.is_some());
//! ```
//!
//! The computer's move selection carries bounded random jitter; pass a
//! fixed seed through [`Game::with_seed`] when tests or replays need
//! deterministic play.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod computer;
mod game;
mod history;
mod types;

// Crate-level exports - Board
pub use board::{Board, ParseBoardError, SIZE};

// Crate-level exports - Computer opponent
pub use computer::{ComputerPlayer, HeuristicWeights};

// Crate-level exports - Game session
pub use game::Game;

// Crate-level exports - History
pub use history::{History, Snapshot};

// Crate-level exports - Domain types
pub use types::{GameMode, Player, Square};
