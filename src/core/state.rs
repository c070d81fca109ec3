//! Game state snapshots.
//!
//! A `GameState` is produced by exactly one transition and never changes
//! afterwards. The flow controller functions in `rules::engine` take a
//! state by reference and return a brand-new one.
//!
//! Uses `im` persistent data structures so that each snapshot shares the
//! board cells and turn history of its predecessor: cloning is O(1), which
//! keeps lookahead and replay cheap.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::player::Owner;
use crate::board::Board;
use crate::resolve::TurnResult;
use crate::rules::GameResult;

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players are placing initial stones.
    Setup,
    /// Turns are being resolved.
    Playing,
    /// The game is over.
    Complete,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    phase: Phase,
    current_turn: u32,
    turn_history: Vector<TurnResult>,
    setup_complete: OrdSet<Owner>,
    winner: Option<Owner>,
}

impl GameState {
    /// A fresh game in `Setup` with an empty board.
    #[must_use]
    pub(crate) fn new(board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            phase: Phase::Setup,
            current_turn: 0,
            turn_history: Vector::new(),
            setup_complete: OrdSet::new(),
            winner: None,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn the next `TurnActions` must be for. Zero during setup.
    #[must_use]
    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    /// Every resolved turn, oldest first.
    #[must_use]
    pub fn turn_history(&self) -> &Vector<TurnResult> {
        &self.turn_history
    }

    /// The most recent turn, if any.
    #[must_use]
    pub fn last_turn(&self) -> Option<&TurnResult> {
        self.turn_history.last()
    }

    /// Owners that have finished setup.
    #[must_use]
    pub fn setup_complete(&self) -> &OrdSet<Owner> {
        &self.setup_complete
    }

    /// Check if an owner has finished setup.
    #[must_use]
    pub fn has_completed_setup(&self, owner: Owner) -> bool {
        self.setup_complete.contains(&owner)
    }

    /// Winner of a completed game; `None` while playing or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Owner> {
        self.winner
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Outcome of a completed game; `None` while the game continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_complete().then(|| GameResult::from_winner(self.winner))
    }

    // === Transitions (crate-internal, each builds a new snapshot) ===

    /// Snapshot after one owner's setup placement.
    pub(crate) fn after_setup(&self, board: Board, owner: Owner) -> Self {
        let setup_complete = self.setup_complete.update(owner);
        let ready = Owner::PLAYERS.iter().all(|p| setup_complete.contains(p));

        Self {
            board,
            phase: if ready { Phase::Playing } else { Phase::Setup },
            current_turn: if ready { 1 } else { 0 },
            turn_history: self.turn_history.clone(),
            setup_complete,
            winner: None,
        }
    }

    /// Snapshot after a resolved turn.
    ///
    /// `finished` carries the winner when the turn ended the game.
    pub(crate) fn after_turn(&self, result: TurnResult, finished: Option<Option<Owner>>) -> Self {
        let mut turn_history = self.turn_history.clone();
        let board = result.board_after.clone();
        turn_history.push_back(result);

        Self {
            board,
            phase: if finished.is_some() { Phase::Complete } else { Phase::Playing },
            current_turn: self.current_turn + 1,
            turn_history,
            setup_complete: self.setup_complete.clone(),
            winner: finished.flatten(),
        }
    }
}
