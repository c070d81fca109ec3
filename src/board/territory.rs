//! A single cell of the board.

use serde::{Deserialize, Serialize};

use crate::core::Owner;

/// Owner and stone count of one position.
///
/// Construction through [`Territory::new`] enforces that a territory with
/// zero stones is neutral, and a neutral territory holds zero stones.
///
/// `growth.max_stones` only caps growth. Reinforcement and merged
/// expansions may leave a territory above it, and it is never clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Territory {
    owner: Owner,
    stones: u32,
}

impl Territory {
    /// Create a territory, normalising empty or neutral cells to `{Neutral, 0}`.
    ///
    /// ```
    /// use rust_territory::board::Territory;
    /// use rust_territory::core::Owner;
    ///
    /// assert_eq!(Territory::new(Owner::PlayerA, 0), Territory::neutral());
    /// assert_eq!(Territory::new(Owner::Neutral, 4), Territory::neutral());
    /// assert_eq!(Territory::new(Owner::PlayerB, 2).stones(), 2);
    /// ```
    #[must_use]
    pub const fn new(owner: Owner, stones: u32) -> Self {
        if stones == 0 || !owner.is_player() {
            Self::neutral()
        } else {
            Self { owner, stones }
        }
    }

    /// An unclaimed, empty territory.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            owner: Owner::Neutral,
            stones: 0,
        }
    }

    /// Current owner.
    #[must_use]
    pub const fn owner(self) -> Owner {
        self.owner
    }

    /// Current stone count.
    #[must_use]
    pub const fn stones(self) -> u32 {
        self.stones
    }

    /// Check if the territory is unclaimed.
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        !self.owner.is_player()
    }
}

impl std::fmt::Display for Territory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_neutral() {
            write!(f, "{:>3}", self.owner.symbol())
        } else {
            write!(f, "{}{:<2}", self.owner.symbol(), self.stones)
        }
    }
}
