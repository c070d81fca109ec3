//! Validation tests.
//!
//! Every rejection goes through `apply_turn` so that atomicity is checked
//! on the real entry point: a rejected turn must leave the state exactly
//! as it was.

use rust_territory::board::Territory;
use rust_territory::core::{
    ConfigError, GameConfig, GameRng, GameState, Owner, Phase, PlayerTurnActions, Position, ReplayRng, RulesError,
    SetupAction, SetupConfig, TerritoryAction, TurnActions,
};
use rust_territory::rules::{apply_setup, apply_turn, create_game};

/// A 5x5 game in `Playing`: A holds (0,2) with 3, B holds (4,2) with 3.
fn playing() -> (GameState, GameConfig) {
    let config = GameConfig::default();
    let state = create_game(&config).unwrap();
    let state = apply_setup(&state, &SetupAction::new(Owner::PlayerA, vec![Position::new(0, 2)]), &config).unwrap();
    let state = apply_setup(&state, &SetupAction::new(Owner::PlayerB, vec![Position::new(4, 2)]), &config).unwrap();
    (state, config)
}

fn b_grows() -> PlayerTurnActions {
    PlayerTurnActions::new().with(Position::new(4, 2), TerritoryAction::Grow)
}

fn a_does(action: TerritoryAction) -> PlayerTurnActions {
    PlayerTurnActions::new().with(Position::new(0, 2), action)
}

/// Apply a turn that must be rejected and check nothing changed.
fn reject(a: PlayerTurnActions, b: PlayerTurnActions) -> RulesError {
    let (state, config) = playing();
    let before = state.clone();
    let actions = TurnActions::new(state.current_turn(), a, b);

    let err = apply_turn(&state, &actions, &config, &mut GameRng::new(1)).unwrap_err();

    assert_eq!(state, before);
    assert_eq!(state.board(), before.board());
    err
}

/// A diagonal destination is rejected and the board is unchanged.
#[test]
fn test_diagonal_move_rejected() {
    let err = reject(a_does(TerritoryAction::move_to(Position::new(1, 3), 1)), b_grows());

    assert_eq!(
        err,
        RulesError::IllegalAdjacency {
            owner: Owner::PlayerA,
            origin: Position::new(0, 2),
            destination: Position::new(1, 3),
        }
    );
}

#[test]
fn test_non_neighbour_rejected() {
    let err = reject(a_does(TerritoryAction::move_to(Position::new(2, 2), 1)), b_grows());
    assert!(matches!(err, RulesError::IllegalAdjacency { .. }));
}

#[test]
fn test_off_board_destination_rejected() {
    let err = reject(a_does(TerritoryAction::move_to(Position::new(-1, 2), 1)), b_grows());
    assert_eq!(
        err,
        RulesError::InvalidPosition {
            owner: Owner::PlayerA,
            position: Position::new(-1, 2)
        }
    );
}

#[test]
fn test_too_many_stones_rejected() {
    let err = reject(
        a_does(TerritoryAction::split(&[(Position::new(0, 1), 2), (Position::new(0, 3), 2)])),
        b_grows(),
    );
    assert_eq!(
        err,
        RulesError::InsufficientStones {
            owner: Owner::PlayerA,
            origin: Position::new(0, 2),
            available: 3,
            requested: 4,
        }
    );
}

#[test]
fn test_missing_action_rejected() {
    let err = reject(a_does(TerritoryAction::Grow), PlayerTurnActions::new());
    assert_eq!(
        err,
        RulesError::IncompleteActionSet {
            owner: Owner::PlayerB,
            position: Position::new(4, 2)
        }
    );
}

#[test]
fn test_duplicate_action_rejected() {
    let err = reject(
        a_does(TerritoryAction::Grow).with(Position::new(0, 2), TerritoryAction::move_to(Position::new(0, 1), 1)),
        b_grows(),
    );
    assert!(matches!(err, RulesError::DuplicateAction { owner: Owner::PlayerA, .. }));
}

#[test]
fn test_action_for_opponent_territory_rejected() {
    let err = reject(
        a_does(TerritoryAction::Grow).with(Position::new(4, 2), TerritoryAction::Grow),
        b_grows(),
    );
    assert_eq!(
        err,
        RulesError::UnownedSource {
            owner: Owner::PlayerA,
            position: Position::new(4, 2)
        }
    );
}

#[test]
fn test_action_for_neutral_territory_rejected() {
    let err = reject(a_does(TerritoryAction::Grow), b_grows().with(Position::new(2, 2), TerritoryAction::Grow));
    assert!(matches!(err, RulesError::UnownedSource { owner: Owner::PlayerB, .. }));
}

#[test]
fn test_empty_and_repeated_legs_rejected() {
    let err = reject(a_does(TerritoryAction::split(&[])), b_grows());
    assert!(matches!(err, RulesError::EmptyMove { .. }));

    let err = reject(
        a_does(TerritoryAction::split(&[(Position::new(0, 1), 1), (Position::new(0, 1), 1)])),
        b_grows(),
    );
    assert!(matches!(err, RulesError::DuplicateDestination { .. }));
}

/// One bad action from B voids A's legal moves too.
#[test]
fn test_rejection_is_all_or_nothing() {
    let err = reject(
        a_does(TerritoryAction::move_to(Position::new(1, 2), 3)),
        PlayerTurnActions::new().with(Position::new(4, 2), TerritoryAction::move_to(Position::new(3, 3), 1)),
    );
    assert!(matches!(err, RulesError::IllegalAdjacency { owner: Owner::PlayerB, .. }));
}

#[test]
fn test_wrong_turn_rejected() {
    let (state, config) = playing();
    let actions = TurnActions::new(7, a_does(TerritoryAction::Grow), b_grows());

    let err = apply_turn(&state, &actions, &config, &mut GameRng::new(1)).unwrap_err();

    assert_eq!(err, RulesError::TurnMismatch { current: 1, submitted: 7 });
    assert!(state.turn_history().is_empty());
}

/// A config that could never finish combat is rejected before any roll.
#[test]
fn test_zero_hit_chance_rejected_mid_game() {
    let (state, config) = playing();
    let before = state.clone();
    let bad = config.with_hit_chance(0.0);
    let actions = TurnActions::new(
        state.current_turn(),
        a_does(TerritoryAction::move_to(Position::new(1, 2), 3)),
        PlayerTurnActions::new().with(Position::new(4, 2), TerritoryAction::move_to(Position::new(3, 2), 3)),
    );

    let mut rng = ReplayRng::default();
    let err = apply_turn(&state, &actions, &bad, &mut rng).unwrap_err();

    assert!(matches!(err, RulesError::Config(ConfigError::OutOfRange { name: "combat.hit_chance", .. })));
    assert_eq!(state, before);
    assert!(state.turn_history().is_empty());
    assert_eq!(rng.overrun(), 0);
}

#[test]
fn test_nan_expansion_rate_rejected_mid_game() {
    let (state, config) = playing();
    let bad = config.with_expansion_success_rate(f64::NAN);
    let actions = TurnActions::new(state.current_turn(), a_does(TerritoryAction::Grow), b_grows());

    let err = apply_turn(&state, &actions, &bad, &mut GameRng::new(1)).unwrap_err();

    assert!(matches!(
        err,
        RulesError::Config(ConfigError::Probability { name: "expansion_success_rate", .. })
    ));
    assert!(state.turn_history().is_empty());
}

#[test]
fn test_setup_outside_zone_rejected() {
    let config = GameConfig::default();
    let state = create_game(&config).unwrap();

    // Row 4 is Player B's zone.
    let err = apply_setup(&state, &SetupAction::new(Owner::PlayerA, vec![Position::new(4, 0)]), &config).unwrap_err();

    assert_eq!(
        err,
        RulesError::InvalidPosition {
            owner: Owner::PlayerA,
            position: Position::new(4, 0)
        }
    );
    assert_eq!(state.phase(), Phase::Setup);
}

#[test]
fn test_setup_on_occupied_cell_rejected() {
    let config = GameConfig::default().with_setup(SetupConfig {
        territories_per_player: 2,
        ..Default::default()
    });
    let state = create_game(&config).unwrap();

    let setup = SetupAction::new(Owner::PlayerA, vec![Position::new(0, 1), Position::new(0, 1)]);
    let err = apply_setup(&state, &setup, &config).unwrap_err();

    assert_eq!(
        err,
        RulesError::InvalidPosition {
            owner: Owner::PlayerA,
            position: Position::new(0, 1)
        }
    );
    assert_eq!(state.board().get(Position::new(0, 1)), Some(Territory::neutral()));
    assert!(!state.has_completed_setup(Owner::PlayerA));
}

#[test]
fn test_setup_after_game_started_rejected() {
    let (state, config) = playing();

    let err = apply_setup(&state, &SetupAction::new(Owner::PlayerA, vec![Position::new(0, 0)]), &config).unwrap_err();

    assert_eq!(
        err,
        RulesError::PhaseMismatch {
            expected: Phase::Setup,
            actual: Phase::Playing
        }
    );
}
