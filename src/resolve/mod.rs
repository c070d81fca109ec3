//! Turn resolution pipeline.
//!
//! A validated turn passes through five phases, strictly in order:
//!
//! 1. **Departure** (`movement`): stones leave their sources for both
//!    players at once; every leg is classified by its destination's owner
//!    at turn start.
//! 2. **Reinforcement** (`movement`): friendly destinations gain stones.
//! 3. **Expansion** (`expansion`): per-stone trials into neutral territory.
//! 4. **Combat** (`combat`): attacks, summed per destination.
//! 5. **Growth** (`growth`): surviving, non-emptied territories grow.
//!
//! `turn::resolve_turn` sequences the phases and assembles a
//! [`TurnResult`] that records every outcome.

pub mod combat;
pub mod expansion;
pub mod growth;
pub mod movement;
pub mod result;
pub mod turn;

pub use combat::resolve_combat;
pub use expansion::resolve_expansion;
pub use growth::apply_growth;
pub use movement::{classify, depart, Departure, PendingMovement};
pub use result::{
    CombatOutcome, CombatResult, CombatRoll, ExpansionResult, MovementKind, MovementOutcome, MovementResult, Roller,
    TurnResult,
};
pub use turn::resolve_turn;
