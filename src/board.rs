//! Board representation and the capture (flipping) rule.

use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Board side length.
pub const SIZE: usize = 8;

/// The 8 ray directions: 4 orthogonal and 4 diagonal.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 8x8 Reversi board with derived piece counts.
///
/// A plain value type: cloning yields an independent board, which is how
/// the game engine takes undo snapshots. Counts are recomputed in full
/// after every mutation and always equal the literal cell tallies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [[Square; SIZE]; SIZE],
    /// Black piece tally.
    black_count: u8,
    /// White piece tally.
    white_count: u8,
}

impl Board {
    /// Creates a board in the standard opening position: two pieces per
    /// side on the four center cells, Black on the main diagonal.
    pub fn new() -> Self {
        let mut board = Self {
            squares: [[Square::Empty; SIZE]; SIZE],
            black_count: 0,
            white_count: 0,
        };
        board.reset();
        board
    }

    /// Resets the board to the opening position.
    pub fn reset(&mut self) {
        self.squares = [[Square::Empty; SIZE]; SIZE];
        self.squares[3][3] = Square::Occupied(Player::Black);
        self.squares[4][4] = Square::Occupied(Player::Black);
        self.squares[3][4] = Square::Occupied(Player::White);
        self.squares[4][3] = Square::Occupied(Player::White);
        self.recount();
    }

    /// Gets the square at the given coordinates.
    ///
    /// Out-of-range coordinates read as `Square::Empty`, so callers never
    /// need their own bounds checks.
    pub fn square(&self, row: usize, col: usize) -> Square {
        if row < SIZE && col < SIZE {
            self.squares[row][col]
        } else {
            Square::Empty
        }
    }

    /// Returns the piece tally for the given side.
    pub fn count(&self, player: Player) -> u8 {
        match player {
            Player::Black => self.black_count,
            Player::White => self.white_count,
        }
    }

    /// Checks whether placing a piece for `player` at the given cell is
    /// legal: the cell must be an in-range empty square, and at least one
    /// of the 8 rays from it must capture.
    pub fn is_legal_move(&self, row: usize, col: usize, player: Player) -> bool {
        if row >= SIZE || col >= SIZE || !self.squares[row][col].is_empty() {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.ray_captures(row, col, dr, dc, player))
    }

    /// Checks whether any of the 64 cells is a legal move for `player`.
    ///
    /// Drives pass detection and the game-over condition.
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        (0..SIZE).any(|row| (0..SIZE).any(|col| self.is_legal_move(row, col, player)))
    }

    /// Returns every legal move for `player` in row-major order.
    ///
    /// The ordering is part of the contract: the computer opponent's
    /// tie-breaking is stable over this enumeration.
    pub fn legal_moves(&self, player: Player) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.is_legal_move(row, col, player) {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    /// Places a piece for `player` at the given cell and flips every
    /// captured run. A no-op when the move is illegal.
    ///
    /// All qualifying rays are determined against the pre-move board
    /// before any flip is applied, then every opposing piece along each
    /// qualifying ray is flipped up to (not including) the terminating
    /// same-side anchor. Counts are recomputed afterward.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize, player: Player) {
        if !self.is_legal_move(row, col, player) {
            return;
        }

        let mut flips = Vec::new();
        for &(dr, dc) in &DIRECTIONS {
            if self.ray_captures(row, col, dr, dc, player) {
                self.collect_ray(row, col, dr, dc, player, &mut flips);
            }
        }

        self.squares[row][col] = Square::Occupied(player);
        for &(r, c) in &flips {
            self.squares[r][c] = self.squares[r][c].flipped();
        }
        self.recount();

        debug!(row, col, %player, flipped = flips.len(), "move applied");
    }

    /// Walks the ray from `(row, col)` in direction `(dr, dc)` and reports
    /// whether it captures: one-or-more opposing pieces immediately
    /// followed by a same-side piece, before running off-board or hitting
    /// an empty cell.
    fn ray_captures(&self, row: usize, col: usize, dr: i32, dc: i32, player: Player) -> bool {
        let opponent = Square::Occupied(player.opponent());
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;
        let mut found_opponent = false;

        while in_bounds(r, c) {
            match self.squares[r as usize][c as usize] {
                sq if sq == opponent => found_opponent = true,
                Square::Occupied(_) => return found_opponent,
                Square::Empty => return false,
            }
            r += dr;
            c += dc;
        }
        false
    }

    /// Collects the opposing run along a qualifying ray into `flips`.
    fn collect_ray(
        &self,
        row: usize,
        col: usize,
        dr: i32,
        dc: i32,
        player: Player,
        flips: &mut Vec<(usize, usize)>,
    ) {
        let opponent = Square::Occupied(player.opponent());
        let mut r = row as i32 + dr;
        let mut c = col as i32 + dc;

        while in_bounds(r, c) && self.squares[r as usize][c as usize] == opponent {
            flips.push((r as usize, c as usize));
            r += dr;
            c += dc;
        }
    }

    /// Recomputes both tallies from the grid.
    fn recount(&mut self) {
        self.black_count = 0;
        self.white_count = 0;
        for row in &self.squares {
            for sq in row {
                match sq {
                    Square::Occupied(Player::Black) => self.black_count += 1,
                    Square::Occupied(Player::White) => self.white_count += 1,
                    Square::Empty => {}
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from parsing a board out of text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The text did not contain exactly 8 rows.
    #[display("expected {SIZE} rows, found {_0}")]
    WrongRowCount(#[error(not(source))] usize),
    /// A row did not contain exactly 8 cells.
    #[display("row {row} has {len} cells, expected {SIZE}")]
    WrongRowLength {
        /// Offending row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },
    /// A cell character was not one of `B`, `W`, `.`.
    #[display("unknown cell '{ch}' at row {row}, column {col}")]
    UnknownCell {
        /// Offending row index.
        row: usize,
        /// Offending column index.
        col: usize,
        /// The character found.
        ch: char,
    },
}

impl Board {
    /// Parses a board from 8 lines of `B`, `W`, and `.` characters.
    ///
    /// Blank lines and surrounding whitespace are ignored, so fixtures can
    /// be written with raw string literals. Counts are recomputed from the
    /// parsed grid. This is the fail-fast constructor: malformed input is
    /// an error here, never a mid-game condition.
    pub fn from_text(text: &str) -> Result<Self, ParseBoardError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != SIZE {
            return Err(ParseBoardError::WrongRowCount(lines.len()));
        }

        let mut squares = [[Square::Empty; SIZE]; SIZE];
        for (row, line) in lines.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != SIZE {
                return Err(ParseBoardError::WrongRowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                squares[row][col] = match ch {
                    'B' => Square::Occupied(Player::Black),
                    'W' => Square::Occupied(Player::White),
                    '.' => Square::Empty,
                    ch => return Err(ParseBoardError::UnknownCell { row, col, ch }),
                };
            }
        }

        let mut board = Self {
            squares,
            black_count: 0,
            white_count: 0,
        };
        board.recount();
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for sq in row {
                let ch = match sq {
                    Square::Occupied(Player::Black) => 'B',
                    Square::Occupied(Player::White) => 'W',
                    Square::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Checks signed coordinates against the board bounds.
fn in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < SIZE as i32 && col >= 0 && col < SIZE as i32
}
