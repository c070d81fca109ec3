//! Board model: territories and the grid that holds them.
//!
//! Boards are values. Queries never mutate, and the only public way to
//! change a board is [`Board::with_territory`], which returns a new one.

pub mod grid;
pub mod territory;

pub use grid::Board;
pub use territory::Territory;
