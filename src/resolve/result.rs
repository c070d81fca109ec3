//! Audit trail of a resolved turn.
//!
//! Randomness-driven outcomes (a failed expansion, a lost battle) are
//! recorded here as data. Together the records account for every stone:
//!
//! `board_after.total_stones() == board_before.total_stones() - stones_lost() + growth_added`

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Owner, Position};

/// How a movement was classified at departure time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Destination already owned by the mover.
    Reinforcement,
    /// Destination was neutral.
    Expansion,
    /// Destination was owned by the opponent.
    Attack,
}

/// Which side made a combat roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Roller {
    /// The moving force.
    Attacker,
    /// The stones on the destination.
    Defender,
}

/// One combat roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatRoll {
    /// Who rolled.
    pub roller: Roller,
    /// Whether the roll removed an enemy stone.
    pub hit: bool,
}

/// How a battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// The defender ran out of stones; the attacker takes the territory.
    AttackerWins,
    /// The attacker ran out of stones; the defender keeps the territory.
    DefenderHolds,
    /// Both sides ran out in the same round; the territory becomes neutral.
    MutualDestruction,
}

/// Full record of one battle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatResult {
    /// Attacking player.
    pub attacker: Owner,
    /// Player that owned the destination when the turn began.
    pub defender: Owner,
    /// Attacking stones, summed over every converging attack.
    pub initial_attacker: u32,
    /// Stones on the destination when combat began.
    pub initial_defender: u32,
    /// Rolls in draw order.
    pub rolls: Vec<CombatRoll>,
    /// Surviving attackers.
    pub final_attacker: u32,
    /// Surviving defenders.
    pub final_defender: u32,
    /// Result of the battle.
    pub outcome: CombatOutcome,
}

impl CombatResult {
    /// Attacking stones eliminated.
    #[must_use]
    pub fn attacker_losses(&self) -> u32 {
        self.initial_attacker - self.final_attacker
    }

    /// Defending stones eliminated.
    #[must_use]
    pub fn defender_losses(&self) -> u32 {
        self.initial_defender - self.final_defender
    }

    /// All stones eliminated in this battle.
    #[must_use]
    pub fn stones_lost(&self) -> u64 {
        u64::from(self.attacker_losses()) + u64::from(self.defender_losses())
    }
}

/// Full record of one expansion into neutral territory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpansionResult {
    /// Stones sent.
    pub stones_sent: u32,
    /// One trial per stone, in draw order.
    pub trials: Vec<bool>,
    /// Whether the stones now hold the destination.
    pub succeeded: bool,
    /// A trial succeeded but the opponent had already claimed the
    /// destination earlier in the same phase.
    pub blocked: bool,
}

impl ExpansionResult {
    /// Stones lost: everything sent if the expansion did not succeed.
    #[must_use]
    pub fn stones_lost(&self) -> u64 {
        if self.succeeded {
            0
        } else {
            u64::from(self.stones_sent)
        }
    }
}

/// What happened to a movement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementOutcome {
    /// Stones were added to a friendly territory.
    Reinforced,
    /// Expansion trials and result.
    Expansion(ExpansionResult),
    /// The battle this movement led.
    Combat(CombatResult),
    /// Stones fought as part of the battle led by the movement from `lead`.
    JoinedAttack {
        /// Source of the movement carrying the combat record.
        lead: Position,
    },
}

/// One resolved `(source, destination, stones)` movement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementResult {
    /// Moving player.
    pub owner: Owner,
    /// Territory the stones left.
    pub source: Position,
    /// Territory the stones went to.
    pub destination: Position,
    /// Stones moved.
    pub stones: u32,
    /// Classification fixed at departure.
    pub kind: MovementKind,
    /// Resolution record.
    pub outcome: MovementOutcome,
}

impl MovementResult {
    /// Combat record, if this movement led a battle.
    #[must_use]
    pub fn combat(&self) -> Option<&CombatResult> {
        match &self.outcome {
            MovementOutcome::Combat(combat) => Some(combat),
            _ => None,
        }
    }

    /// Expansion record, if this movement was an expansion.
    #[must_use]
    pub fn expansion(&self) -> Option<&ExpansionResult> {
        match &self.outcome {
            MovementOutcome::Expansion(expansion) => Some(expansion),
            _ => None,
        }
    }
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnResult {
    /// Turn number.
    pub turn: u32,
    /// Board when the turn began.
    pub board_before: Board,
    /// Board after all five phases.
    pub board_after: Board,
    /// Movements in resolution order (row-major by source).
    pub movements: Vec<MovementResult>,
    /// Positions whose stones increased in the growth phase, row-major.
    pub grown: Vec<Position>,
    /// Total stones added by growth.
    pub growth_added: u64,
}

impl TurnResult {
    /// Stones lost to failed expansions and combat.
    #[must_use]
    pub fn stones_lost(&self) -> u64 {
        self.movements
            .iter()
            .map(|movement| match &movement.outcome {
                MovementOutcome::Expansion(expansion) => expansion.stones_lost(),
                MovementOutcome::Combat(combat) => combat.stones_lost(),
                MovementOutcome::Reinforced | MovementOutcome::JoinedAttack { .. } => 0,
            })
            .sum()
    }

    /// Battles fought this turn, in resolution order.
    pub fn combats(&self) -> impl Iterator<Item = &CombatResult> {
        self.movements.iter().filter_map(MovementResult::combat)
    }

    /// Expansions attempted this turn, in resolution order.
    pub fn expansions(&self) -> impl Iterator<Item = &ExpansionResult> {
        self.movements.iter().filter_map(MovementResult::expansion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combat(initial: (u32, u32), remaining: (u32, u32), outcome: CombatOutcome) -> CombatResult {
        CombatResult {
            attacker: Owner::PlayerA,
            defender: Owner::PlayerB,
            initial_attacker: initial.0,
            initial_defender: initial.1,
            rolls: Vec::new(),
            final_attacker: remaining.0,
            final_defender: remaining.1,
            outcome,
        }
    }

    #[test]
    fn test_combat_losses() {
        let result = combat((5, 3), (2, 0), CombatOutcome::AttackerWins);

        assert_eq!(result.attacker_losses(), 3);
        assert_eq!(result.defender_losses(), 3);
        assert_eq!(result.stones_lost(), 6);
    }

    #[test]
    fn test_expansion_losses() {
        let won = ExpansionResult {
            stones_sent: 3,
            trials: vec![false, true, false],
            succeeded: true,
            blocked: false,
        };
        let blocked = ExpansionResult {
            stones_sent: 2,
            trials: vec![true, true],
            succeeded: false,
            blocked: true,
        };

        assert_eq!(won.stones_lost(), 0);
        assert_eq!(blocked.stones_lost(), 2);
    }

    #[test]
    fn test_turn_stones_lost() {
        let movement = |outcome| MovementResult {
            owner: Owner::PlayerA,
            source: Position::new(0, 0),
            destination: Position::new(0, 1),
            stones: 1,
            kind: MovementKind::Attack,
            outcome,
        };

        let result = TurnResult {
            turn: 1,
            board_before: Board::new(2),
            board_after: Board::new(2),
            movements: vec![
                movement(MovementOutcome::Combat(combat((4, 2), (0, 1), CombatOutcome::DefenderHolds))),
                movement(MovementOutcome::JoinedAttack { lead: Position::new(0, 0) }),
                movement(MovementOutcome::Reinforced),
            ],
            grown: Vec::new(),
            growth_added: 0,
        };

        assert_eq!(result.stones_lost(), 5);
        assert_eq!(result.combats().count(), 1);
        assert_eq!(result.expansions().count(), 0);
    }
}
