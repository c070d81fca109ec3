//! Action representation: what each player intends for each territory.
//!
//! Every turn both players submit, for every territory they own, exactly
//! one [`TerritoryAction`]:
//! - `Grow` keeps all stones in place and earns end-of-turn growth
//! - `Move` splits stones across one or more adjacent destinations
//!
//! The two players' batches are bundled in [`TurnActions`] and resolved
//! together. Simultaneity is a modelling contract: neither batch can see
//! the other.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Owner, OwnerMap};
use super::position::Position;
use crate::board::Board;

/// One destination of a split move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveLeg {
    /// Where the stones go.
    pub destination: Position,
    /// How many stones go there.
    pub stones: u32,
}

impl MoveLeg {
    /// Create a move leg.
    #[must_use]
    pub const fn new(destination: Position, stones: u32) -> Self {
        Self { destination, stones }
    }
}

/// The action chosen for one owned territory.
///
/// ## Example
///
/// ```
/// use rust_territory::core::{Position, TerritoryAction};
///
/// let grow = TerritoryAction::Grow;
/// assert_eq!(grow.stones_sent(), 0);
///
/// // Send 2 stones right and 1 stone down.
/// let split = TerritoryAction::split(&[(Position::new(1, 2), 2), (Position::new(2, 1), 1)]);
/// assert_eq!(split.stones_sent(), 3);
/// assert_eq!(split.legs().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerritoryAction {
    /// Stay and grow.
    Grow,
    /// Send stones to adjacent positions.
    /// SmallVec holds the at-most-four orthogonal legs without allocating.
    Move(SmallVec<[MoveLeg; 4]>),
}

impl TerritoryAction {
    /// Move stones to a single destination.
    #[must_use]
    pub fn move_to(destination: Position, stones: u32) -> Self {
        Self::split(&[(destination, stones)])
    }

    /// Move stones to several destinations.
    #[must_use]
    pub fn split(legs: &[(Position, u32)]) -> Self {
        TerritoryAction::Move(
            legs.iter()
                .map(|&(destination, stones)| MoveLeg::new(destination, stones))
                .collect(),
        )
    }

    /// The legs of a move; empty for `Grow`.
    #[must_use]
    pub fn legs(&self) -> &[MoveLeg] {
        match self {
            TerritoryAction::Grow => &[],
            TerritoryAction::Move(legs) => legs.as_slice(),
        }
    }

    /// Total stones leaving the territory.
    ///
    /// Widened to `u64` so that hostile inputs cannot overflow.
    #[must_use]
    pub fn stones_sent(&self) -> u64 {
        self.legs().iter().map(|leg| u64::from(leg.stones)).sum()
    }

    /// Check if this is a `Grow` action.
    #[must_use]
    pub fn is_grow(&self) -> bool {
        matches!(self, TerritoryAction::Grow)
    }
}

/// One player's actions for a turn, keyed by source territory.
///
/// Stored as a list rather than a map so that duplicate entries survive
/// until validation can reject them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerTurnActions {
    actions: Vec<(Position, TerritoryAction)>,
}

impl PlayerTurnActions {
    /// Create an empty action set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every territory the owner holds on `board` grows.
    #[must_use]
    pub fn grow_all(board: &Board, owner: Owner) -> Self {
        Self {
            actions: board
                .positions_owned_by(owner)
                .into_iter()
                .map(|position| (position, TerritoryAction::Grow))
                .collect(),
        }
    }

    /// Add an action (builder style).
    #[must_use]
    pub fn with(mut self, source: Position, action: TerritoryAction) -> Self {
        self.push(source, action);
        self
    }

    /// Add an action.
    pub fn push(&mut self, source: Position, action: TerritoryAction) {
        self.actions.push((source, action));
    }

    /// Replace the action for a source, or add it if absent.
    pub fn set(&mut self, source: Position, action: TerritoryAction) {
        match self.actions.iter_mut().find(|(pos, _)| *pos == source) {
            Some(entry) => entry.1 = action,
            None => self.actions.push((source, action)),
        }
    }

    /// The action for a source, if any.
    #[must_use]
    pub fn get(&self, source: Position) -> Option<&TerritoryAction> {
        self.actions
            .iter()
            .find(|(pos, _)| *pos == source)
            .map(|(_, action)| action)
    }

    /// Iterate over `(source, action)` pairs in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &TerritoryAction)> {
        self.actions.iter().map(|(pos, action)| (*pos, action))
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if there are no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Both players' actions for one turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnActions {
    /// Turn these actions are for (starts at 1).
    pub turn: u32,
    /// Actions per player.
    pub players: OwnerMap<PlayerTurnActions>,
}

impl TurnActions {
    /// Bundle both players' actions.
    #[must_use]
    pub fn new(turn: u32, player_a: PlayerTurnActions, player_b: PlayerTurnActions) -> Self {
        let mut players = OwnerMap::with_value(PlayerTurnActions::new());
        players[Owner::PlayerA] = player_a;
        players[Owner::PlayerB] = player_b;
        Self { turn, players }
    }

    /// Both players grow every territory.
    #[must_use]
    pub fn grow_all(turn: u32, board: &Board) -> Self {
        Self::new(
            turn,
            PlayerTurnActions::grow_all(board, Owner::PlayerA),
            PlayerTurnActions::grow_all(board, Owner::PlayerB),
        )
    }

    /// Actions of one player.
    #[must_use]
    pub fn for_owner(&self, owner: Owner) -> &PlayerTurnActions {
        &self.players[owner]
    }
}

/// Initial placement for one player during setup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetupAction {
    /// Player placing stones.
    pub owner: Owner,
    /// Territories to claim, each receiving `setup.stones_per_placement`.
    pub positions: Vec<Position>,
}

impl SetupAction {
    /// Create a setup action.
    #[must_use]
    pub fn new(owner: Owner, positions: Vec<Position>) -> Self {
        Self { owner, positions }
    }
}
