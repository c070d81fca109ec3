//! Grid positions.
//!
//! Every territory on the board is addressed by a `Position`.
//!
//! ## Layout
//!
//! Positions are `(row, col)` pairs. Coordinates are signed so that
//! out-of-bounds destinations submitted by a player can be represented
//! and rejected by validation rather than failing to construct.
//!
//! Ordering is row-major: `(0, 4) < (1, 0)`. Turn resolution relies on
//! this ordering to process converging movements deterministically.
//!
//! ```
//! use rust_territory::core::Position;
//!
//! let a = Position::new(1, 1);
//! let b = Position::new(1, 2);
//!
//! assert!(a.is_adjacent(b));
//! assert!(!a.is_adjacent(Position::new(2, 2))); // diagonal
//! assert!(a < b);
//! ```

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the board.
///
/// Value type with no identity. Valid iff `0 <= row, col < board_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0 = top).
    pub row: i32,
    /// Column index (0 = left).
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check if this position lies on a board of the given size.
    #[must_use]
    pub fn in_bounds(self, board_size: usize) -> bool {
        let size = board_size as i64;
        (0..size).contains(&i64::from(self.row)) && (0..size).contains(&i64::from(self.col))
    }

    /// Row-major index into a board of the given size.
    ///
    /// Returns `None` if the position is out of bounds.
    #[must_use]
    pub fn index(self, board_size: usize) -> Option<usize> {
        if self.in_bounds(board_size) {
            Some(self.row as usize * board_size + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub fn from_index(index: usize, board_size: usize) -> Self {
        Self::new((index / board_size) as i32, (index % board_size) as i32)
    }

    /// Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Orthogonal adjacency (Manhattan distance exactly 1).
    ///
    /// Diagonals and the position itself are not adjacent.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// The four orthogonal neighbours in up, down, left, right order.
    ///
    /// Not bounds-checked; see `Board::neighbors` for the in-bounds subset.
    #[must_use]
    pub const fn orthogonal(self) -> [Position; 4] {
        [
            Position::new(self.row - 1, self.col),
            Position::new(self.row + 1, self.col),
            Position::new(self.row, self.col - 1),
            Position::new(self.row, self.col + 1),
        ]
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
