//! Turn orchestration: phases 1 through 5 in order.
//!
//! Random draws happen in one fixed sequence per turn: every expansion's
//! trials (movement order), then every battle's rolls (ordered by the
//! battle's first source). Reordering either changes which draw applies to
//! which event for the same seed.

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::board::Territory;
use crate::core::{GameConfig, Position, RandomSource};
use crate::rules::ValidatedTurn;

use super::combat::resolve_combat;
use super::expansion::resolve_expansion;
use super::growth::apply_growth;
use super::movement::{depart, reinforce, PendingMovement};
use super::result::{CombatOutcome, MovementKind, MovementOutcome, MovementResult, TurnResult};

/// Resolve a validated turn into its result.
///
/// Never fails: randomness-driven outcomes are recorded in the result,
/// and everything that could be illegal was rejected by validation.
///
/// ## Example
///
/// ```
/// use rust_territory::board::{Board, Territory};
/// use rust_territory::core::{GameConfig, GameRng, Owner, Phase, PlayerTurnActions, Position, TerritoryAction, TurnActions};
/// use rust_territory::resolve::resolve_turn;
/// use rust_territory::rules::validate;
///
/// let board = Board::new(5)
///     .with_territory(Position::new(1, 1), Territory::new(Owner::PlayerA, 3))?;
/// let actions = TurnActions::new(
///     1,
///     PlayerTurnActions::new().with(Position::new(1, 1), TerritoryAction::move_to(Position::new(1, 2), 3)),
///     PlayerTurnActions::new(),
/// );
/// let config = GameConfig::default();
///
/// let turn = validate(&board, Phase::Playing, &actions, &config)?;
/// let result = resolve_turn(&turn, &config, &mut GameRng::new(7));
///
/// assert_eq!(result.board_after.get(Position::new(1, 2)), Some(Territory::new(Owner::PlayerA, 3)));
/// assert_eq!(result.board_after.get(Position::new(1, 1)), Some(Territory::neutral()));
/// # Ok::<(), rust_territory::core::RulesError>(())
/// ```
#[instrument(skip_all, fields(turn = turn.actions().turn))]
pub fn resolve_turn<R: RandomSource + ?Sized>(turn: &ValidatedTurn<'_>, config: &GameConfig, rng: &mut R) -> TurnResult {
    // Phase 1: departure
    let departure = depart(turn);
    let mut board = departure.board;
    let movements = departure.movements;
    let mut outcomes: Vec<Option<MovementOutcome>> = vec![None; movements.len()];
    debug!(movements = movements.len(), "departed");

    // Phase 2: reinforcement
    for (index, movement) in movements.iter().enumerate() {
        if movement.kind == MovementKind::Reinforcement {
            reinforce(&mut board, movement);
            outcomes[index] = Some(MovementOutcome::Reinforced);
        }
    }

    // Phase 3: expansion
    let mut expansions = 0usize;
    for (index, movement) in movements.iter().enumerate() {
        if movement.kind == MovementKind::Expansion {
            let result = resolve_expansion(&mut board, movement, config.expansion_success_rate, rng);
            outcomes[index] = Some(MovementOutcome::Expansion(result));
            expansions += 1;
        }
    }
    debug!(expansions, "expansions resolved");

    // Phase 4: combat
    let battles = group_attacks(&movements);
    for group in &battles {
        let lead = &movements[group[0]];
        let attacking = group
            .iter()
            .fold(0u32, |total, &index| total.saturating_add(movements[index].stones));
        let defender = turn.board().owner_at(lead.destination).unwrap_or_default();
        let current = board.get(lead.destination).unwrap_or_default();
        let defending = if current.owner() == defender { current.stones() } else { 0 };

        let combat = resolve_combat(lead.owner, defender, attacking, defending, &config.combat, rng);
        let after = match combat.outcome {
            CombatOutcome::AttackerWins => Territory::new(lead.owner, combat.final_attacker),
            CombatOutcome::DefenderHolds => Territory::new(defender, combat.final_defender),
            CombatOutcome::MutualDestruction => Territory::neutral(),
        };
        board.set(lead.destination, after);

        for &index in &group[1..] {
            outcomes[index] = Some(MovementOutcome::JoinedAttack { lead: lead.source });
        }
        outcomes[group[0]] = Some(MovementOutcome::Combat(combat));
    }
    debug!(battles = battles.len(), "combat resolved");

    // Phase 5: growth
    let (grown, growth_added) = apply_growth(&mut board, &departure.growth_eligible, &config.growth);
    debug!(grown = grown.len(), growth_added, "growth applied");

    let movements = movements
        .into_iter()
        .zip(outcomes)
        .filter_map(|(movement, outcome)| {
            outcome.map(|outcome| MovementResult {
                owner: movement.owner,
                source: movement.source,
                destination: movement.destination,
                stones: movement.stones,
                kind: movement.kind,
                outcome,
            })
        })
        .collect();

    TurnResult {
        turn: turn.actions().turn,
        board_before: turn.board().clone(),
        board_after: board,
        movements,
        grown,
        growth_added,
    }
}

/// Attack movements grouped by destination.
///
/// Groups are ordered by their first movement, and so by first source;
/// each group lists movement indices in movement order.
fn group_attacks(movements: &[PendingMovement]) -> Vec<Vec<usize>> {
    let mut by_destination: FxHashMap<Position, usize> = FxHashMap::default();
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (index, movement) in movements.iter().enumerate() {
        if movement.kind != MovementKind::Attack {
            continue;
        }
        let group = *by_destination.entry(movement.destination).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[group].push(index);
    }

    groups
}
