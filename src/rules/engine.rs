//! Game flow: setup sequencing, turn application, win determination.
//!
//! Every function takes the current [`GameState`] by reference and returns
//! a new snapshot. On error the caller's state is untouched, because
//! nothing was ever mutated.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Territory};
use crate::core::{GameConfig, GameState, Owner, Phase, Position, RandomSource, RulesError, SetupAction, TurnActions};
use crate::resolve::resolve_turn;

use super::validator::validate;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Owner),
    /// Both players hold the same number of territories.
    Draw,
}

impl GameResult {
    /// Result for an optional winner.
    #[must_use]
    pub fn from_winner(winner: Option<Owner>) -> Self {
        winner.map_or(GameResult::Draw, GameResult::Winner)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Owner) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Start a new game: `Setup` phase, empty board.
pub fn create_game(config: &GameConfig) -> Result<GameState, RulesError> {
    config.validate()?;
    Ok(GameState::new(config.board_size))
}

/// Place one owner's initial stones.
///
/// The owner must not have set up yet and must name exactly
/// `setup.territories_per_player` distinct, unoccupied positions inside
/// their setup zone. Once both owners are done the game moves to `Playing`
/// on turn 1.
#[instrument(skip_all, fields(owner = %setup.owner))]
pub fn apply_setup(state: &GameState, setup: &SetupAction, config: &GameConfig) -> Result<GameState, RulesError> {
    let board = place_setup(state, setup, config).inspect_err(|err| warn!(%err, "setup rejected"))?;

    let next = state.after_setup(board, setup.owner);
    debug!(phase = ?next.phase(), "setup applied");
    Ok(next)
}

fn place_setup(state: &GameState, setup: &SetupAction, config: &GameConfig) -> Result<Board, RulesError> {
    if state.phase() != Phase::Setup {
        return Err(RulesError::PhaseMismatch {
            expected: Phase::Setup,
            actual: state.phase(),
        });
    }
    config.validate()?;

    let owner = setup.owner;
    if !owner.is_player() {
        return Err(RulesError::NeutralActor);
    }
    if state.has_completed_setup(owner) {
        return Err(RulesError::SetupAlreadyComplete(owner));
    }
    if setup.positions.len() != config.setup.territories_per_player {
        return Err(RulesError::PlacementCount {
            owner,
            expected: config.setup.territories_per_player,
            actual: setup.positions.len(),
        });
    }

    let mut board = state.board().clone();
    for &position in &setup.positions {
        let free = board.get(position).is_some_and(|t| t.is_neutral());
        if !free || !config.in_setup_zone(owner, position) {
            return Err(RulesError::InvalidPosition { owner, position });
        }
        board.set(position, Territory::new(owner, config.setup.stones_per_placement));
    }

    Ok(board)
}

/// Validate and resolve one turn.
///
/// Checks the phase and turn number, then validates both players' actions
/// as a whole; any failure rejects the entire turn. On success the turn
/// result is appended to the history. The game completes after
/// `num_turns` turns, or as soon as a player holds no territory.
#[instrument(skip_all, fields(turn = actions.turn))]
pub fn apply_turn<R: RandomSource + ?Sized>(
    state: &GameState,
    actions: &TurnActions,
    config: &GameConfig,
    rng: &mut R,
) -> Result<GameState, RulesError> {
    check_turn(state, actions)
        .and_then(|()| validate(state.board(), state.phase(), actions, config))
        .map(|turn| {
            let result = resolve_turn(&turn, config, rng);
            let board = &result.board_after;

            let eliminated = Owner::PLAYERS.iter().any(|&p| board.territory_count(p) == 0);
            let finished = (result.turn >= config.num_turns || eliminated).then(|| determine_winner(board));
            if let Some(winner) = finished {
                info!(turn = result.turn, ?winner, eliminated, "game complete");
            }

            state.after_turn(result, finished)
        })
        .inspect_err(|err| warn!(%err, "turn rejected"))
}

fn check_turn(state: &GameState, actions: &TurnActions) -> Result<(), RulesError> {
    if state.phase() != Phase::Playing {
        return Err(RulesError::PhaseMismatch {
            expected: Phase::Playing,
            actual: state.phase(),
        });
    }
    if actions.turn != state.current_turn() {
        return Err(RulesError::TurnMismatch {
            current: state.current_turn(),
            submitted: actions.turn,
        });
    }
    Ok(())
}

/// The player holding more territories, or `None` on a tie.
#[must_use]
pub fn determine_winner(board: &Board) -> Option<Owner> {
    let a = board.territory_count(Owner::PlayerA);
    let b = board.territory_count(Owner::PlayerB);
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Some(Owner::PlayerA),
        std::cmp::Ordering::Less => Some(Owner::PlayerB),
        std::cmp::Ordering::Equal => None,
    }
}

/// First free positions of an owner's setup zone, row-major.
///
/// A convenient legal setup for scripted games and tests.
#[must_use]
pub fn default_setup(state: &GameState, owner: Owner, config: &GameConfig) -> SetupAction {
    let positions: Vec<Position> = config
        .setup_zone(owner)
        .filter(|&pos| state.board().get(pos).is_some_and(|t| t.is_neutral()))
        .take(config.setup.territories_per_player)
        .collect();
    SetupAction::new(owner, positions)
}
