//! Territory ownership.
//!
//! ## Owner
//!
//! Every position has exactly one owner: `Neutral`, `PlayerA` or `PlayerB`.
//!
//! ## OwnerMap
//!
//! Per-player data storage for the two players, indexed by `Owner`.
//! Indexing with `Owner::Neutral` panics; callers iterate `Owner::PLAYERS`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Owner of a territory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Owner {
    /// Unclaimed territory. Always holds zero stones.
    #[default]
    Neutral,
    /// The first player.
    PlayerA,
    /// The second player.
    PlayerB,
}

impl Owner {
    /// The two players, in resolution order.
    pub const PLAYERS: [Owner; 2] = [Owner::PlayerA, Owner::PlayerB];

    /// Check if this owner is a player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        !matches!(self, Owner::Neutral)
    }

    /// The opposing player.
    ///
    /// Returns `None` for `Neutral`.
    ///
    /// ```
    /// use rust_territory::core::Owner;
    ///
    /// assert_eq!(Owner::PlayerA.opponent(), Some(Owner::PlayerB));
    /// assert_eq!(Owner::Neutral.opponent(), None);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Option<Owner> {
        match self {
            Owner::PlayerA => Some(Owner::PlayerB),
            Owner::PlayerB => Some(Owner::PlayerA),
            Owner::Neutral => None,
        }
    }

    /// Single-character symbol used by board rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Owner::Neutral => '.',
            Owner::PlayerA => 'A',
            Owner::PlayerB => 'B',
        }
    }

    const fn slot(self) -> usize {
        match self {
            Owner::PlayerA => 0,
            Owner::PlayerB => 1,
            Owner::Neutral => panic!("Neutral has no player slot"),
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Neutral => write!(f, "Neutral"),
            Owner::PlayerA => write!(f, "Player A"),
            Owner::PlayerB => write!(f, "Player B"),
        }
    }
}

/// Per-player data for the two players.
///
/// ## Example
///
/// ```
/// use rust_territory::core::{Owner, OwnerMap};
///
/// let mut counts: OwnerMap<u32> = OwnerMap::with_value(0);
/// counts[Owner::PlayerB] += 3;
///
/// assert_eq!(counts[Owner::PlayerA], 0);
/// assert_eq!(counts[Owner::PlayerB], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerMap<T> {
    data: [T; 2],
}

impl<T> OwnerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Owner) -> T) -> Self {
        Self {
            data: [factory(Owner::PlayerA), factory(Owner::PlayerB)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a player's entry.
    #[must_use]
    pub fn get(&self, owner: Owner) -> &T {
        &self.data[owner.slot()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, owner: Owner) -> &mut T {
        &mut self.data[owner.slot()]
    }

    /// Iterate over `(Owner, &T)` pairs in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (Owner, &T)> {
        Owner::PLAYERS.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Owner> for OwnerMap<T> {
    type Output = T;

    fn index(&self, owner: Owner) -> &Self::Output {
        self.get(owner)
    }
}

impl<T> IndexMut<Owner> for OwnerMap<T> {
    fn index_mut(&mut self, owner: Owner) -> &mut Self::Output {
        self.get_mut(owner)
    }
}
