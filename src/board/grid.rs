//! The board: a square grid of territories.
//!
//! `Board` is an immutable value from the caller's point of view. All
//! public operations are queries or return a new board; only turn
//! resolution inside this crate edits a private working copy.
//!
//! Storage is a row-major `im::Vector`, so cloning a board (for turn
//! history or lookahead) is O(1) and unchanged cells are shared.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Owner, Position, RulesError};

use super::Territory;

/// Fixed-size mapping from every position to a territory.
///
/// ## Usage
///
/// ```
/// use rust_territory::board::{Board, Territory};
/// use rust_territory::core::{Owner, Position};
///
/// let board = Board::new(5)
///     .with_territory(Position::new(1, 1), Territory::new(Owner::PlayerA, 3))
///     .unwrap();
///
/// assert_eq!(board.owner_at(Position::new(1, 1)), Some(Owner::PlayerA));
/// assert_eq!(board.stones_at(Position::new(1, 1)), Some(3));
/// assert_eq!(board.territory_count(Owner::Neutral), 24);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vector<Territory>,
}

impl Board {
    /// Create a board of `size x size` neutral territories.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(Territory::neutral()).take(size * size).collect(),
        }
    }

    /// Width (and height) of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if a position is on this board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.in_bounds(self.size)
    }

    /// Territory at a position, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Territory> {
        let index = position.index(self.size)?;
        self.cells.get(index).copied()
    }

    /// Owner at a position.
    #[must_use]
    pub fn owner_at(&self, position: Position) -> Option<Owner> {
        self.get(position).map(Territory::owner)
    }

    /// Stone count at a position.
    #[must_use]
    pub fn stones_at(&self, position: Position) -> Option<u32> {
        self.get(position).map(Territory::stones)
    }

    /// All positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |index| Position::from_index(index, self.size))
    }

    /// All `(position, territory)` pairs, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Territory)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, territory)| (Position::from_index(index, self.size), *territory))
    }

    /// Positions held by an owner, row-major.
    #[must_use]
    pub fn positions_owned_by(&self, owner: Owner) -> Vec<Position> {
        self.iter()
            .filter(|(_, territory)| territory.owner() == owner)
            .map(|(position, _)| position)
            .collect()
    }

    /// In-bounds orthogonal neighbours, in up, down, left, right order.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        position
            .orthogonal()
            .into_iter()
            .filter(move |&neighbor| self.contains(neighbor))
    }

    /// Number of territories held by an owner.
    #[must_use]
    pub fn territory_count(&self, owner: Owner) -> usize {
        self.cells.iter().filter(|t| t.owner() == owner).count()
    }

    /// Total stones on the board.
    #[must_use]
    pub fn total_stones(&self) -> u64 {
        self.cells.iter().map(|t| u64::from(t.stones())).sum()
    }

    /// Total stones held by one owner.
    #[must_use]
    pub fn total_stones_of(&self, owner: Owner) -> u64 {
        self.cells
            .iter()
            .filter(|t| t.owner() == owner)
            .map(|t| u64::from(t.stones()))
            .sum()
    }

    /// Return a copy of this board with one territory replaced.
    pub fn with_territory(&self, position: Position, territory: Territory) -> Result<Self, RulesError> {
        let mut next = self.clone();
        if !next.set(position, territory) {
            return Err(RulesError::InvalidPosition {
                owner: territory.owner(),
                position,
            });
        }
        Ok(next)
    }

    /// Replace a territory in place. Returns false if out of bounds.
    pub(crate) fn set(&mut self, position: Position, territory: Territory) -> bool {
        match position.index(self.size) {
            Some(index) => {
                self.cells.set(index, territory);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, territory) in self.cells.iter().enumerate() {
            if index % self.size != 0 {
                write!(f, " ")?;
            }
            write!(f, "{territory}")?;
            if index % self.size == self.size - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board::new(3)
            .with_territory(Position::new(0, 0), Territory::new(Owner::PlayerA, 2))
            .unwrap()
            .with_territory(Position::new(2, 1), Territory::new(Owner::PlayerB, 5))
            .unwrap()
            .with_territory(Position::new(1, 1), Territory::new(Owner::PlayerA, 1))
            .unwrap()
    }

    #[test]
    fn test_new_board_is_neutral() {
        let board = Board::new(4);

        assert_eq!(board.size(), 4);
        assert_eq!(board.territory_count(Owner::Neutral), 16);
        assert_eq!(board.total_stones(), 0);
    }

    #[test]
    fn test_queries() {
        let board = sample_board();

        assert_eq!(board.owner_at(Position::new(2, 1)), Some(Owner::PlayerB));
        assert_eq!(board.stones_at(Position::new(2, 1)), Some(5));
        assert_eq!(board.owner_at(Position::new(3, 0)), None);
        assert_eq!(
            board.positions_owned_by(Owner::PlayerA),
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
        assert_eq!(board.total_stones(), 8);
        assert_eq!(board.total_stones_of(Owner::PlayerA), 3);
    }

    #[test]
    fn test_ownership_is_exhaustive() {
        let board = sample_board();
        let total: usize = [Owner::Neutral, Owner::PlayerA, Owner::PlayerB]
            .iter()
            .map(|&owner| board.territory_count(owner))
            .sum();

        assert_eq!(total, 9);
    }

    #[test]
    fn test_neighbors() {
        let board = Board::new(3);

        let corner: Vec<_> = board.neighbors(Position::new(0, 0)).collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        let center: Vec<_> = board.neighbors(Position::new(1, 1)).collect();
        assert_eq!(center.len(), 4);
    }

    #[test]
    fn test_with_territory_is_pure() {
        let board = Board::new(3);
        let next = board
            .with_territory(Position::new(1, 1), Territory::new(Owner::PlayerB, 1))
            .unwrap();

        assert_eq!(board.owner_at(Position::new(1, 1)), Some(Owner::Neutral));
        assert_eq!(next.owner_at(Position::new(1, 1)), Some(Owner::PlayerB));
    }

    #[test]
    fn test_with_territory_out_of_bounds() {
        let err = Board::new(3)
            .with_territory(Position::new(0, 3), Territory::new(Owner::PlayerA, 1))
            .unwrap_err();

        assert!(matches!(err, RulesError::InvalidPosition { .. }));
    }

    #[test]
    fn test_display() {
        let rendered = sample_board().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "A2    .   .");
        assert_eq!(lines[2], "  . B5    .");
    }

    #[test]
    fn test_serialization() {
        let board = sample_board();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
    }
}
