//! # rust-territory
//!
//! Rules engine for a two-player, simultaneous-move territory game on a
//! square grid.
//!
//! Each turn both players commit one action per territory they hold: grow
//! in place, or split the stones across orthogonally adjacent territories.
//! The engine resolves both batches at once into a single next state,
//! including probabilistic expansion and combat.
//!
//! ## Design Principles
//!
//! 1. **Simultaneity**: Departures for both players are computed from the
//!    same turn-start board; neither side observes the other's moves.
//!
//! 2. **Determinism**: Randomness comes only from a caller-supplied
//!    [`RandomSource`], drawn in one fixed order per turn. Same seed, same
//!    game, bit for bit.
//!
//! 3. **Validate, then resolve**: A turn is either entirely legal or
//!    entirely rejected. [`resolve_turn`] only accepts a [`ValidatedTurn`].
//!
//! ## Architecture
//!
//! - **Immutable snapshots**: every transition returns a new
//!   [`GameState`]; `im-rs` makes board and history clones O(1), so
//!   lookahead can branch freely.
//!
//! - **Audit trail**: every [`TurnResult`] records each roll and trial, and
//!   accounts for every stone lost or grown.
//!
//! ## Modules
//!
//! - `core`: positions, owners, actions, configuration, RNG, state, errors
//! - `board`: territories and the grid
//! - `resolve`: the five-phase turn resolution pipeline
//! - `rules`: validation and game flow
//! - `agents`: decision makers and the match driver
//!
//! ## Example
//!
//! ```
//! use rust_territory::{apply_setup, apply_turn, create_game, default_setup};
//! use rust_territory::{GameConfig, GameRng, Owner, TurnActions};
//!
//! let config = GameConfig::default();
//! let mut rng = GameRng::new(42);
//!
//! let state = create_game(&config)?;
//! let state = apply_setup(&state, &default_setup(&state, Owner::PlayerA, &config), &config)?;
//! let state = apply_setup(&state, &default_setup(&state, Owner::PlayerB, &config), &config)?;
//!
//! let actions = TurnActions::grow_all(state.current_turn(), state.board());
//! let state = apply_turn(&state, &actions, &config, &mut rng)?;
//!
//! assert_eq!(state.turn_history().len(), 1);
//! # Ok::<(), rust_territory::RulesError>(())
//! ```

pub mod agents;
pub mod board;
pub mod core;
pub mod resolve;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CombatConfig, CombatResolution, ConfigError, GameConfig, GrowthConfig, SetupConfig,
    GameRng, GameRngState, RandomSource, RecordingRng, ReplayRng,
    GameState, Phase,
    MoveLeg, PlayerTurnActions, SetupAction, TerritoryAction, TurnActions,
    Owner, OwnerMap, Position,
    RulesError,
};

pub use crate::board::{Board, Territory};

pub use crate::resolve::{
    resolve_turn,
    CombatOutcome, CombatResult, CombatRoll, ExpansionResult,
    MovementKind, MovementOutcome, MovementResult, Roller, TurnResult,
};

pub use crate::rules::{
    apply_setup, apply_turn, create_game, default_setup, determine_winner, validate,
    GameResult, ValidatedTurn,
};

pub use crate::agents::{play_game, Agent, GrowAgent, RandomAgent};
