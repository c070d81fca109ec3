//! Phases 1 and 2: departure, classification, reinforcement.
//!
//! Departures are computed from the turn-start board for both players at
//! once, so neither player's moves observe the other's. Each leg of each
//! move becomes a [`PendingMovement`], classified by who owned its
//! destination before anyone moved. Classification is never revisited.

use crate::board::{Board, Territory};
use crate::core::{Owner, Position, TerritoryAction};
use crate::rules::ValidatedTurn;

use super::result::MovementKind;

/// A movement that has left its source but not yet arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMovement {
    /// Moving player.
    pub owner: Owner,
    /// Territory the stones left.
    pub source: Position,
    /// Territory the stones are heading to.
    pub destination: Position,
    /// Stones in transit.
    pub stones: u32,
    /// Classification at departure.
    pub kind: MovementKind,
}

/// Board and movements after phase 1.
#[derive(Clone, Debug)]
pub struct Departure {
    /// Turn-start board with every departing stone removed.
    pub board: Board,
    /// All legs of both players, stably sorted row-major by source.
    pub movements: Vec<PendingMovement>,
    /// Territories that may grow in phase 5, with their turn-start owner.
    pub growth_eligible: Vec<(Position, Owner)>,
}

/// Classify a movement by the destination's owner before departure.
#[must_use]
pub fn classify(mover: Owner, destination_owner: Owner) -> MovementKind {
    if destination_owner == mover {
        MovementKind::Reinforcement
    } else if destination_owner == Owner::Neutral {
        MovementKind::Expansion
    } else {
        MovementKind::Attack
    }
}

/// Phase 1: remove departing stones and queue every movement.
///
/// A source that sends everything becomes `{Neutral, 0}`; otherwise it
/// keeps its owner and the remainder, and stays eligible for growth.
#[must_use]
pub fn depart(turn: &ValidatedTurn<'_>) -> Departure {
    let before = turn.board();
    let mut board = before.clone();
    let mut movements = Vec::new();
    let mut growth_eligible = Vec::new();

    for owner in Owner::PLAYERS {
        for (source, action) in turn.actions().for_owner(owner).iter() {
            let available = before.stones_at(source).unwrap_or(0);

            match action {
                TerritoryAction::Grow => growth_eligible.push((source, owner)),
                TerritoryAction::Move(legs) => {
                    let sent = u32::try_from(action.stones_sent()).unwrap_or(u32::MAX);
                    let remaining = available.saturating_sub(sent);
                    board.set(source, Territory::new(owner, remaining));
                    if remaining > 0 {
                        growth_eligible.push((source, owner));
                    }

                    for leg in legs {
                        let destination_owner = before.owner_at(leg.destination).unwrap_or(Owner::Neutral);
                        movements.push(PendingMovement {
                            owner,
                            source,
                            destination: leg.destination,
                            stones: leg.stones,
                            kind: classify(owner, destination_owner),
                        });
                    }
                }
            }
        }
    }

    // Stable: legs of one source keep their submitted order.
    movements.sort_by_key(|movement| movement.source);
    growth_eligible.sort();

    Departure {
        board,
        movements,
        growth_eligible,
    }
}

/// Phase 2: add a reinforcement to its destination.
///
/// Uncapped; the growth cap only limits phase 5. The destination is either
/// still held by the mover or was vacated this turn, so it always ends up
/// owned by the mover.
pub fn reinforce(board: &mut Board, movement: &PendingMovement) {
    let current = board.stones_at(movement.destination).unwrap_or(0);
    board.set(
        movement.destination,
        Territory::new(movement.owner, current.saturating_add(movement.stones)),
    );
}
