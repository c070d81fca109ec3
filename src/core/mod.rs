//! Core types: positions, owners, actions, configuration, RNG, state, errors.
//!
//! Everything here is plain data. The rules that move data from one
//! snapshot to the next live in `resolve` and `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::{MoveLeg, PlayerTurnActions, SetupAction, TerritoryAction, TurnActions};
pub use config::{CombatConfig, CombatResolution, ConfigError, GameConfig, GrowthConfig, SetupConfig};
pub use error::RulesError;
pub use player::{Owner, OwnerMap};
pub use position::Position;
pub use rng::{GameRng, GameRngState, RandomSource, RecordingRng, ReplayRng};
pub use state::{GameState, Phase};
