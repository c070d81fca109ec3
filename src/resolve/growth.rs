//! Phase 5: growth.

use tracing::trace;

use crate::board::{Board, Territory};
use crate::core::{GrowthConfig, Owner, Position};

/// Grow every eligible territory still held by its turn-start owner.
///
/// Each territory gains `min(stones_per_turn, max_stones - stones)`, so
/// growth never pushes past the cap and never shrinks a territory that
/// reinforcement already took above it.
///
/// Returns the positions that actually gained stones, in the order of
/// `eligible`, and the total added.
pub fn apply_growth(board: &mut Board, eligible: &[(Position, Owner)], config: &GrowthConfig) -> (Vec<Position>, u64) {
    let mut grown = Vec::new();
    let mut added = 0u64;

    for &(position, owner) in eligible {
        let Some(territory) = board.get(position) else {
            continue;
        };
        if territory.owner() != owner {
            continue;
        }

        let gain = config
            .stones_per_turn
            .min(config.max_stones.saturating_sub(territory.stones()));
        if gain == 0 {
            continue;
        }

        board.set(position, Territory::new(owner, territory.stones() + gain));
        trace!(%position, gain, "growth");
        grown.push(position);
        added += u64::from(gain);
    }

    (grown, added)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(Position, Owner, u32)]) -> Board {
        let mut board = Board::new(4);
        for &(pos, owner, stones) in cells {
            board.set(pos, Territory::new(owner, stones));
        }
        board
    }

    #[test]
    fn test_grow_adds_per_turn() {
        let pos = Position::new(1, 1);
        let mut board = board_with(&[(pos, Owner::PlayerA, 2)]);

        let (grown, added) = apply_growth(&mut board, &[(pos, Owner::PlayerA)], &GrowthConfig::default());

        assert_eq!(board.get(pos), Some(Territory::new(Owner::PlayerA, 3)));
        assert_eq!(grown, vec![pos]);
        assert_eq!(added, 1);
    }

    #[test]
    fn test_cap_limits_gain() {
        let pos = Position::new(0, 0);
        let mut board = board_with(&[(pos, Owner::PlayerB, 9)]);
        let config = GrowthConfig {
            stones_per_turn: 3,
            max_stones: 10,
        };

        let (_, added) = apply_growth(&mut board, &[(pos, Owner::PlayerB)], &config);

        assert_eq!(board.stones_at(pos), Some(10));
        assert_eq!(added, 1);
    }

    #[test]
    fn test_above_cap_is_not_reduced() {
        let pos = Position::new(0, 0);
        let mut board = board_with(&[(pos, Owner::PlayerA, 14)]);

        let (grown, added) = apply_growth(&mut board, &[(pos, Owner::PlayerA)], &GrowthConfig::default());

        assert_eq!(board.stones_at(pos), Some(14));
        assert!(grown.is_empty());
        assert_eq!(added, 0);
    }

    #[test]
    fn test_changed_owner_does_not_grow() {
        let captured = Position::new(2, 2);
        let emptied = Position::new(3, 3);
        let mut board = board_with(&[(captured, Owner::PlayerB, 2)]);

        let eligible = [(captured, Owner::PlayerA), (emptied, Owner::PlayerA)];
        let (grown, added) = apply_growth(&mut board, &eligible, &GrowthConfig::default());

        assert!(grown.is_empty());
        assert_eq!(added, 0);
        assert_eq!(board.get(captured), Some(Territory::new(Owner::PlayerB, 2)));
        assert_eq!(board.get(emptied), Some(Territory::neutral()));
    }
}
