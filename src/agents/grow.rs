use crate::core::{GameConfig, GameState, Owner, PlayerTurnActions, SetupAction};
use crate::rules::default_setup;

use super::Agent;

/// Sets up on the first free cells of its zone and always grows.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrowAgent;

impl Agent for GrowAgent {
    fn name(&self) -> &str {
        "grow"
    }

    fn choose_setup(&mut self, state: &GameState, owner: Owner, config: &GameConfig) -> SetupAction {
        default_setup(state, owner, config)
    }

    fn choose_actions(&mut self, state: &GameState, owner: Owner, _config: &GameConfig) -> PlayerTurnActions {
        PlayerTurnActions::grow_all(state.board(), owner)
    }
}
