//! Agents and the match driver.
//!
//! An [`Agent`] decides setup placements and per-turn actions for one
//! owner. Agents only see immutable snapshots; [`play_game`] feeds their
//! decisions through the same validation as any other caller, so a buggy
//! agent produces a `RulesError`, never a corrupt game.
//!
//! ## Example
//!
//! ```
//! use rust_territory::agents::{play_game, GrowAgent, RandomAgent};
//! use rust_territory::core::{GameConfig, GameRng};
//!
//! let config = GameConfig::default().with_num_turns(5);
//! let mut rng = GameRng::new(42);
//!
//! let state = play_game(&config, &mut GrowAgent, &mut RandomAgent::new(7), &mut rng)?;
//! assert!(state.is_complete());
//! # Ok::<(), rust_territory::core::RulesError>(())
//! ```

mod grow;
mod random;

pub use grow::GrowAgent;
pub use random::RandomAgent;

use tracing::{debug, instrument};

use crate::core::{GameConfig, GameState, Owner, PlayerTurnActions, RandomSource, RulesError, SetupAction, TurnActions};
use crate::rules::{apply_setup, apply_turn, create_game};

/// Decision maker for one side of a game.
pub trait Agent {
    /// Display name for logs.
    fn name(&self) -> &str;

    /// Initial placements for `owner`. Called once, during `Setup`.
    fn choose_setup(&mut self, state: &GameState, owner: Owner, config: &GameConfig) -> SetupAction;

    /// One action per territory `owner` holds on the current board.
    fn choose_actions(&mut self, state: &GameState, owner: Owner, config: &GameConfig) -> PlayerTurnActions;
}

/// Play a full game between two agents.
///
/// Player A sets up first. Turn resolution draws from `rng`; agents use
/// their own randomness, so the same agents and seed replay the same game.
#[instrument(skip_all, fields(a = agent_a.name(), b = agent_b.name()))]
pub fn play_game<A, B, R>(
    config: &GameConfig,
    agent_a: &mut A,
    agent_b: &mut B,
    rng: &mut R,
) -> Result<GameState, RulesError>
where
    A: Agent + ?Sized,
    B: Agent + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut state = create_game(config)?;

    let setup = agent_a.choose_setup(&state, Owner::PlayerA, config);
    state = apply_setup(&state, &setup, config)?;
    let setup = agent_b.choose_setup(&state, Owner::PlayerB, config);
    state = apply_setup(&state, &setup, config)?;

    while !state.is_complete() {
        let actions = TurnActions::new(
            state.current_turn(),
            agent_a.choose_actions(&state, Owner::PlayerA, config),
            agent_b.choose_actions(&state, Owner::PlayerB, config),
        );
        state = apply_turn(&state, &actions, config, rng)?;
    }

    debug!(turns = state.turn_history().len(), winner = ?state.winner(), "game finished");
    Ok(state)
}
