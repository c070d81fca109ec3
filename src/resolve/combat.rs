//! Phase 4: combat.
//!
//! A battle is a sequence of rounds. In each round the defender rolls
//! first, then the attacker; every hit removes one enemy stone. How the
//! round is checked depends on [`CombatResolution`]:
//!
//! - `Alternating`: check after each roll, so one side always reaches zero
//!   strictly before the other and mutual destruction cannot occur.
//! - `Simultaneous`: draw both rolls, then check. Both sides reaching zero
//!   in the same round is mutual destruction.
//!
//! Callers must guarantee `hit_chance > 0`, which `GameConfig::validate`
//! enforces; otherwise a battle never ends.

use tracing::trace;

use crate::core::{CombatConfig, CombatResolution, Owner, RandomSource};

use super::result::{CombatOutcome, CombatResult, CombatRoll, Roller};

/// Fight one battle between `attacking` and `defending` stones.
///
/// A defender with no stones loses without any rolls being drawn.
pub fn resolve_combat<R: RandomSource + ?Sized>(
    attacker: Owner,
    defender: Owner,
    attacking: u32,
    defending: u32,
    config: &CombatConfig,
    rng: &mut R,
) -> CombatResult {
    let mut battle = Battle {
        attacker: attacking,
        defender: defending,
        rolls: Vec::new(),
    };

    let outcome = if defending == 0 {
        CombatOutcome::AttackerWins
    } else if attacking == 0 {
        CombatOutcome::DefenderHolds
    } else {
        match config.resolution {
            CombatResolution::Alternating => battle.alternating(config.hit_chance, rng),
            CombatResolution::Simultaneous => battle.simultaneous(config.hit_chance, rng),
        }
    };

    CombatResult {
        attacker,
        defender,
        initial_attacker: attacking,
        initial_defender: defending,
        final_attacker: battle.attacker,
        final_defender: battle.defender,
        rolls: battle.rolls,
        outcome,
    }
}

/// Running totals of one battle.
struct Battle {
    attacker: u32,
    defender: u32,
    rolls: Vec<CombatRoll>,
}

impl Battle {
    fn alternating<R: RandomSource + ?Sized>(&mut self, hit_chance: f64, rng: &mut R) -> CombatOutcome {
        loop {
            self.roll(Roller::Defender, hit_chance, rng);
            if self.attacker == 0 {
                return CombatOutcome::DefenderHolds;
            }

            self.roll(Roller::Attacker, hit_chance, rng);
            if self.defender == 0 {
                return CombatOutcome::AttackerWins;
            }
        }
    }

    fn simultaneous<R: RandomSource + ?Sized>(&mut self, hit_chance: f64, rng: &mut R) -> CombatOutcome {
        loop {
            self.roll(Roller::Defender, hit_chance, rng);
            self.roll(Roller::Attacker, hit_chance, rng);

            match (self.attacker, self.defender) {
                (0, 0) => return CombatOutcome::MutualDestruction,
                (0, _) => return CombatOutcome::DefenderHolds,
                (_, 0) => return CombatOutcome::AttackerWins,
                _ => {}
            }
        }
    }

    /// Draw one roll; a hit removes a stone from the other side.
    fn roll<R: RandomSource + ?Sized>(&mut self, roller: Roller, hit_chance: f64, rng: &mut R) {
        let hit = rng.roll(hit_chance);
        if hit {
            match roller {
                Roller::Defender => self.attacker = self.attacker.saturating_sub(1),
                Roller::Attacker => self.defender = self.defender.saturating_sub(1),
            }
        }
        trace!(?roller, hit, attacker = self.attacker, defender = self.defender, "combat roll");
        self.rolls.push(CombatRoll { roller, hit });
    }
}
