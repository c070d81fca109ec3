//! Game configuration types.
//!
//! The engine never hardcodes rule constants. Callers provide:
//! - `CombatConfig`: Hit chance and round structure for attacks
//! - `GrowthConfig`: End-of-turn stone increments and the cap
//! - `SetupConfig`: Initial placements and setup zones
//! - `GameConfig`: Combines all configuration with board size and length
//!
//! Every field has a default, so a partial JSON document is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::Owner;
use super::position::Position;

/// Invalid configuration value.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A probability outside `[0, 1]` (or NaN).
    #[error("{name} must be within [0, 1], got {value}")]
    Probability {
        /// Config key.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A value outside its permitted range.
    #[error("{name} is out of range: {reason}")]
    OutOfRange {
        /// Config key.
        name: &'static str,
        /// What the constraint is.
        reason: String,
    },

    /// The config document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// How a combat round is structured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatResolution {
    /// Defender rolls, check, attacker rolls, check. Combat stops on the
    /// first side reaching zero, so mutual destruction cannot happen.
    #[default]
    Alternating,
    /// Both rolls of a round are drawn (defender first) before checking.
    /// Both sides reaching zero in one round is mutual destruction.
    Simultaneous,
}

/// Combat parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Probability that a single roll removes one enemy stone.
    pub hit_chance: f64,
    /// Round structure.
    pub resolution: CombatResolution,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hit_chance: 0.5,
            resolution: CombatResolution::Alternating,
        }
    }
}

/// End-of-turn growth parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Stones added to each eligible territory.
    pub stones_per_turn: u32,
    /// Growth never raises a territory above this.
    pub max_stones: u32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            stones_per_turn: 1,
            max_stones: 10,
        }
    }
}

/// Setup-phase parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Stones placed on each chosen territory.
    pub stones_per_placement: u32,
    /// Number of territories each player claims during setup.
    pub territories_per_player: usize,
    /// Rows of the setup zone: Player A uses the first `zone_depth` rows,
    /// Player B the last `zone_depth` rows.
    pub zone_depth: usize,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            stones_per_placement: 3,
            territories_per_player: 1,
            zone_depth: 1,
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use rust_territory::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_board_size(7)
///     .with_hit_chance(0.6)
///     .with_expansion_success_rate(0.5);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.growth.max_stones, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square grid.
    pub board_size: usize,
    /// Number of turns before the game completes.
    pub num_turns: u32,
    /// Combat parameters.
    pub combat: CombatConfig,
    /// Growth parameters.
    pub growth: GrowthConfig,
    /// Setup parameters.
    pub setup: SetupConfig,
    /// Per-stone success probability when moving into neutral territory.
    pub expansion_success_rate: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 5,
            num_turns: 20,
            combat: CombatConfig::default(),
            growth: GrowthConfig::default(),
            setup: SetupConfig::default(),
            expansion_success_rate: 1.0,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config document. Missing keys take their defaults.
    ///
    /// The parsed config is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the game length in turns.
    #[must_use]
    pub fn with_num_turns(mut self, turns: u32) -> Self {
        self.num_turns = turns;
        self
    }

    /// Set the combat hit chance.
    #[must_use]
    pub fn with_hit_chance(mut self, chance: f64) -> Self {
        self.combat.hit_chance = chance;
        self
    }

    /// Set the combat round structure.
    #[must_use]
    pub fn with_combat_resolution(mut self, resolution: CombatResolution) -> Self {
        self.combat.resolution = resolution;
        self
    }

    /// Set growth per turn and the growth cap.
    #[must_use]
    pub fn with_growth(mut self, stones_per_turn: u32, max_stones: u32) -> Self {
        self.growth = GrowthConfig {
            stones_per_turn,
            max_stones,
        };
        self
    }

    /// Set the setup parameters.
    #[must_use]
    pub fn with_setup(mut self, setup: SetupConfig) -> Self {
        self.setup = setup;
        self
    }

    /// Set the per-stone expansion success probability.
    #[must_use]
    pub fn with_expansion_success_rate(mut self, rate: f64) -> Self {
        self.expansion_success_rate = rate;
        self
    }

    /// Check if a position is inside an owner's setup zone.
    ///
    /// Neutral has no setup zone.
    #[must_use]
    pub fn in_setup_zone(&self, owner: Owner, position: Position) -> bool {
        if !position.in_bounds(self.board_size) {
            return false;
        }
        let row = position.row as usize;
        let depth = self.setup.zone_depth;
        match owner {
            Owner::PlayerA => row < depth,
            Owner::PlayerB => row >= self.board_size.saturating_sub(depth),
            Owner::Neutral => false,
        }
    }

    /// Positions of an owner's setup zone, row-major.
    pub fn setup_zone(&self, owner: Owner) -> impl Iterator<Item = Position> + '_ {
        let size = self.board_size;
        (0..size * size)
            .map(move |index| Position::from_index(index, size))
            .filter(move |&pos| self.in_setup_zone(owner, pos))
    }

    /// Validate every value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("combat.hit_chance", self.combat.hit_chance)?;
        check_probability("expansion_success_rate", self.expansion_success_rate)?;

        // Combat only ends when a side runs out; a zero hit chance never would.
        if self.combat.hit_chance == 0.0 {
            return Err(out_of_range("combat.hit_chance", "must be greater than 0".to_string()));
        }

        if self.board_size < 2 || self.board_size > i32::MAX as usize {
            return Err(out_of_range("board_size", format!("must be at least 2, got {}", self.board_size)));
        }
        if self.num_turns == 0 {
            return Err(out_of_range("num_turns", "must be at least 1".to_string()));
        }
        if self.growth.max_stones == 0 {
            return Err(out_of_range("growth.max_stones", "must be at least 1".to_string()));
        }

        let setup = &self.setup;
        if setup.stones_per_placement == 0 || setup.stones_per_placement > self.growth.max_stones {
            return Err(out_of_range(
                "setup.stones_per_placement",
                format!(
                    "must be within 1..={}, got {}",
                    self.growth.max_stones, setup.stones_per_placement
                ),
            ));
        }
        if setup.zone_depth == 0 || setup.zone_depth * 2 > self.board_size {
            return Err(out_of_range(
                "setup.zone_depth",
                format!(
                    "zones must not overlap on a {0}x{0} board, got depth {1}",
                    self.board_size, setup.zone_depth
                ),
            ));
        }
        let zone_cells = setup.zone_depth * self.board_size;
        if setup.territories_per_player == 0 || setup.territories_per_player > zone_cells {
            return Err(out_of_range(
                "setup.territories_per_player",
                format!("must be within 1..={zone_cells}, got {}", setup.territories_per_player),
            ));
        }

        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { name, value })
    }
}

fn out_of_range(name: &'static str, reason: String) -> ConfigError {
    ConfigError::OutOfRange { name, reason }
}
