//! Phase 3: expansion into neutral territory.
//!
//! Each stone sent gets one independent trial. One success is enough for
//! the whole force to claim the destination; if every trial fails the
//! stones are lost. All trials are always drawn so that RNG consumption
//! depends only on the stones sent, never on the outcomes.

use tracing::trace;

use crate::board::{Board, Territory};
use crate::core::RandomSource;

use super::movement::PendingMovement;
use super::result::ExpansionResult;

/// Draw one trial per stone, in stone order.
pub fn run_trials<R: RandomSource + ?Sized>(stones: u32, success_rate: f64, rng: &mut R) -> Vec<bool> {
    (0..stones).map(|_| rng.roll(success_rate)).collect()
}

/// Resolve one expansion against the current board.
///
/// The destination was neutral at turn start, but an earlier expansion in
/// this phase may already have claimed it:
/// - still neutral: becomes `{mover, stones}`
/// - claimed by the mover: the stones are added
/// - claimed by the opponent: the expansion is blocked and the stones lost
pub fn resolve_expansion<R: RandomSource + ?Sized>(
    board: &mut Board,
    movement: &PendingMovement,
    success_rate: f64,
    rng: &mut R,
) -> ExpansionResult {
    let trials = run_trials(movement.stones, success_rate, rng);
    let any_success = trials.iter().any(|&hit| hit);
    let current = board.get(movement.destination).unwrap_or_default();

    let blocked = any_success && !current.is_neutral() && current.owner() != movement.owner;
    let succeeded = any_success && !blocked;

    if succeeded {
        board.set(
            movement.destination,
            Territory::new(movement.owner, current.stones().saturating_add(movement.stones)),
        );
    }

    trace!(
        owner = %movement.owner,
        destination = %movement.destination,
        stones = movement.stones,
        succeeded,
        blocked,
        "expansion resolved"
    );

    ExpansionResult {
        stones_sent: movement.stones,
        trials,
        succeeded,
        blocked,
    }
}
