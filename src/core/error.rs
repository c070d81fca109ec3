//! Rule violations.
//!
//! Every variant is detected before any state changes: a rejected turn or
//! setup leaves the game exactly as it was. Random in-game outcomes such as
//! a lost battle are data in the turn result, never errors.

use thiserror::Error;

use super::config::ConfigError;
use super::player::Owner;
use super::position::Position;
use super::state::Phase;

/// Reason a setup, turn, or game creation was rejected.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RulesError {
    /// A position is off the board, or outside the setup zone, or occupied.
    #[error("{owner}: invalid position {position}")]
    InvalidPosition {
        /// Submitting owner.
        owner: Owner,
        /// Offending position.
        position: Position,
    },

    /// A move destination is not orthogonally adjacent to its source.
    #[error("{owner}: {destination} is not adjacent to {origin}")]
    IllegalAdjacency {
        /// Submitting owner.
        owner: Owner,
        /// Territory the stones leave.
        origin: Position,
        /// Requested destination.
        destination: Position,
    },

    /// A move sends more stones than the source holds.
    #[error("{owner}: {origin} holds {available} stones but {requested} were sent")]
    InsufficientStones {
        /// Submitting owner.
        owner: Owner,
        /// Territory the stones leave.
        origin: Position,
        /// Stones on the source.
        available: u32,
        /// Total stones across the move's legs.
        requested: u32,
    },

    /// The operation is not allowed in the current phase.
    #[error("expected phase {expected:?}, game is in {actual:?}")]
    PhaseMismatch {
        /// Phase the operation requires.
        expected: Phase,
        /// Current phase.
        actual: Phase,
    },

    /// An owned territory has no action.
    #[error("{owner}: no action for owned territory {position}")]
    IncompleteActionSet {
        /// Submitting owner.
        owner: Owner,
        /// First territory (row-major) missing an action.
        position: Position,
    },

    /// A territory has more than one action.
    #[error("{owner}: more than one action for {position}")]
    DuplicateAction {
        /// Submitting owner.
        owner: Owner,
        /// Territory with several actions.
        position: Position,
    },

    /// An action names a territory the owner does not hold.
    ///
    /// Reported instead of `IncompleteActionSet` or `DuplicateAction` when
    /// the position belongs to the opponent or is neutral, so callers that
    /// match on ownership problems must handle this variant as well.
    #[error("{owner}: does not own {position}")]
    UnownedSource {
        /// Submitting owner.
        owner: Owner,
        /// Territory named by the action.
        position: Position,
    },

    /// One move names the same destination more than once.
    #[error("{owner}: move from {origin} names {destination} twice")]
    DuplicateDestination {
        /// Submitting owner.
        owner: Owner,
        /// Territory the stones leave.
        origin: Position,
        /// Repeated destination.
        destination: Position,
    },

    /// A move with no legs or a leg of zero stones.
    #[error("{owner}: empty move from {origin}")]
    EmptyMove {
        /// Submitting owner.
        owner: Owner,
        /// Territory the move is for.
        origin: Position,
    },

    /// Actions were submitted for a different turn.
    #[error("actions are for turn {submitted}, game is on turn {current}")]
    TurnMismatch {
        /// Turn number the game expects.
        current: u32,
        /// Turn number on the submitted actions.
        submitted: u32,
    },

    /// Neutral cannot act.
    #[error("neutral territory cannot submit actions")]
    NeutralActor,

    /// The owner has already placed their setup stones.
    #[error("{0} has already completed setup")]
    SetupAlreadyComplete(Owner),

    /// A setup action has the wrong number of placements.
    #[error("{owner}: expected {expected} setup placements, got {actual}")]
    PlacementCount {
        /// Submitting owner.
        owner: Owner,
        /// Configured number of territories per player.
        expected: usize,
        /// Placements submitted.
        actual: usize,
    },

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
