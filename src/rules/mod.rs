//! Rules: turn validation and game flow.
//!
//! - `validator`: all-or-nothing legality checks producing a
//!   [`ValidatedTurn`]
//! - `engine`: setup, turn application and win determination over
//!   immutable [`GameState`](crate::core::GameState) snapshots

pub mod engine;
pub mod validator;

pub use engine::{apply_setup, apply_turn, create_game, default_setup, determine_winner, GameResult};
pub use validator::{validate, ValidatedTurn};
