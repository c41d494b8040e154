//! Heuristic computer opponent.

use crate::board::{Board, SIZE};
use crate::types::Player;
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Scoring knobs for the move heuristic.
///
/// Defaults match the shipped opponent: corners are worth a large fixed
/// bonus, non-corner edges a smaller one, and every candidate gets a
/// bounded random perturbation so near-equal moves don't always resolve
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HeuristicWeights {
    /// Bonus for a corner cell.
    #[serde(default = "default_corner_bonus")]
    corner_bonus: i32,

    /// Bonus for a non-corner edge cell.
    #[serde(default = "default_edge_bonus")]
    edge_bonus: i32,

    /// Exclusive upper bound of the random perturbation; 0 disables it.
    #[serde(default = "default_jitter")]
    jitter: u32,
}

fn default_corner_bonus() -> i32 {
    100
}

fn default_edge_bonus() -> i32 {
    10
}

fn default_jitter() -> u32 {
    10
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            corner_bonus: default_corner_bonus(),
            edge_bonus: default_edge_bonus(),
            jitter: default_jitter(),
        }
    }
}

/// One-ply heuristic move selector for one side.
///
/// Stateless apart from the side it plays and its weights; randomness is
/// threaded in by the caller so play can be made reproducible with a
/// seeded generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerPlayer {
    player: Player,
    weights: HeuristicWeights,
}

impl ComputerPlayer {
    /// Creates a computer player for the given side with default weights.
    pub fn new(player: Player) -> Self {
        Self::with_weights(player, HeuristicWeights::default())
    }

    /// Creates a computer player with custom weights.
    pub fn with_weights(player: Player, weights: HeuristicWeights) -> Self {
        Self { player, weights }
    }

    /// Returns the side this player moves for.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Picks a move for this side, or `None` when no legal move exists
    /// (the caller must treat that as a pass).
    ///
    /// Candidates are scored in row-major enumeration order and ties break
    /// to the earliest candidate, so with a fixed seed the choice is fully
    /// deterministic.
    #[instrument(skip(self, board, rng))]
    pub fn select_move<R: Rng>(&self, board: &Board, rng: &mut R) -> Option<(usize, usize)> {
        let mut best: Option<(usize, usize)> = None;
        let mut best_score = i32::MIN;

        for (row, col) in board.legal_moves(self.player) {
            let score = self.score_move(row, col, rng);
            if score > best_score {
                best_score = score;
                best = Some((row, col));
            }
        }

        if let Some((row, col)) = best {
            debug!(player = %self.player, row, col, score = best_score, "computer chose move");
        }
        best
    }

    /// Positional score plus bounded jitter for one candidate cell.
    fn score_move<R: Rng>(&self, row: usize, col: usize, rng: &mut R) -> i32 {
        let on_row_edge = row == 0 || row == SIZE - 1;
        let on_col_edge = col == 0 || col == SIZE - 1;

        let mut score = if on_row_edge && on_col_edge {
            self.weights.corner_bonus
        } else if on_row_edge || on_col_edge {
            self.weights.edge_bonus
        } else {
            0
        };

        if self.weights.jitter > 0 {
            score += rng.gen_range(0..self.weights.jitter) as i32;
        }
        score
    }
}
