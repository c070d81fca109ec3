//! Turn validation.
//!
//! `validate` is the only way to obtain a [`ValidatedTurn`], and
//! `resolve_turn` only accepts a `ValidatedTurn`, so an unchecked turn can
//! never be resolved.
//!
//! Checks run in a fixed order so that the same illegal turn always yields
//! the same error:
//!
//! 1. the game is in `Playing`
//! 2. the config passes [`GameConfig::validate`]
//! 3. per player, Player A first, per action in submission order:
//!    source bounds, source ownership, duplicate source, then the move's
//!    legs (empty, bounds, adjacency, repeated destination) and its total
//! 4. per player, every owned territory has an action (row-major)

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{GameConfig, MoveLeg, Owner, Phase, PlayerTurnActions, Position, RulesError, TurnActions};

/// A turn that passed validation against a specific board.
///
/// Borrowing both the board and the actions ties the proof to the exact
/// inputs that were checked.
#[derive(Clone, Copy, Debug)]
pub struct ValidatedTurn<'a> {
    board: &'a Board,
    actions: &'a TurnActions,
}

impl<'a> ValidatedTurn<'a> {
    /// The board the actions were checked against.
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The checked actions.
    #[must_use]
    pub fn actions(&self) -> &'a TurnActions {
        self.actions
    }
}

/// Check both players' actions against `board`. All or nothing.
///
/// `config` is checked too: resolution only terminates for a valid one.
pub fn validate<'a>(
    board: &'a Board,
    phase: Phase,
    actions: &'a TurnActions,
    config: &GameConfig,
) -> Result<ValidatedTurn<'a>, RulesError> {
    if phase != Phase::Playing {
        return Err(RulesError::PhaseMismatch {
            expected: Phase::Playing,
            actual: phase,
        });
    }
    config.validate()?;

    for owner in Owner::PLAYERS {
        validate_player(board, owner, actions.for_owner(owner))?;
    }

    Ok(ValidatedTurn { board, actions })
}

fn validate_player(board: &Board, owner: Owner, actions: &PlayerTurnActions) -> Result<(), RulesError> {
    let mut seen: FxHashSet<Position> = FxHashSet::default();

    for (source, action) in actions.iter() {
        let Some(territory) = board.get(source) else {
            return Err(RulesError::InvalidPosition { owner, position: source });
        };
        if territory.owner() != owner {
            return Err(RulesError::UnownedSource { owner, position: source });
        }
        if !seen.insert(source) {
            return Err(RulesError::DuplicateAction { owner, position: source });
        }

        if !action.is_grow() {
            validate_legs(board, owner, source, action.legs())?;

            let sent = action.stones_sent();
            if sent > u64::from(territory.stones()) {
                return Err(RulesError::InsufficientStones {
                    owner,
                    origin: source,
                    available: territory.stones(),
                    requested: u32::try_from(sent).unwrap_or(u32::MAX),
                });
            }
        }
    }

    if let Some(position) = board
        .positions_owned_by(owner)
        .into_iter()
        .find(|pos| !seen.contains(pos))
    {
        return Err(RulesError::IncompleteActionSet { owner, position });
    }

    Ok(())
}

fn validate_legs(board: &Board, owner: Owner, origin: Position, legs: &[MoveLeg]) -> Result<(), RulesError> {
    if legs.is_empty() {
        return Err(RulesError::EmptyMove { owner, origin });
    }

    let mut destinations: SmallVec<[Position; 4]> = SmallVec::new();
    for leg in legs {
        if leg.stones == 0 {
            return Err(RulesError::EmptyMove { owner, origin });
        }
        if !board.contains(leg.destination) {
            return Err(RulesError::InvalidPosition {
                owner,
                position: leg.destination,
            });
        }
        if !origin.is_adjacent(leg.destination) {
            return Err(RulesError::IllegalAdjacency {
                owner,
                origin,
                destination: leg.destination,
            });
        }
        if destinations.contains(&leg.destination) {
            return Err(RulesError::DuplicateDestination {
                owner,
                origin,
                destination: leg.destination,
            });
        }
        destinations.push(leg.destination);
    }

    Ok(())
}
