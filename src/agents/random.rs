use tracing::trace;

use crate::board::Board;
use crate::core::{GameConfig, GameRng, GameState, Owner, PlayerTurnActions, Position, RandomSource, SetupAction, TerritoryAction};

use super::Agent;

/// Plays uniformly random legal actions from its own seeded stream.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
    grow_chance: f64,
}

impl RandomAgent {
    /// Agent drawing from a stream seeded with `seed`. Grows half the time.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            grow_chance: 0.5,
        }
    }

    /// Set the probability of choosing `Grow` for a territory.
    #[must_use]
    pub fn with_grow_chance(mut self, chance: f64) -> Self {
        self.grow_chance = chance;
        self
    }

    /// Remove and return `count` random elements of `pool`.
    fn sample<T>(&mut self, pool: &mut Vec<T>, count: usize) -> Vec<T> {
        (0..count.min(pool.len()))
            .map(|_| {
                let index = self.rng.gen_range_usize(0..pool.len());
                pool.swap_remove(index)
            })
            .collect()
    }

    /// A random move from `source`: 1..=stones sent over 1..=4 distinct
    /// neighbours, every leg carrying at least one stone.
    fn random_move(&mut self, mut neighbors: Vec<Position>, stones: u32) -> TerritoryAction {
        let sent = self.rng.gen_range_u32(1..=stones);
        let max_legs = neighbors.len().min(sent as usize);
        let leg_count = self.rng.gen_range_usize(1..max_legs + 1);
        let destinations = self.sample(&mut neighbors, leg_count);

        let mut amounts = vec![1u32; destinations.len()];
        for _ in destinations.len() as u32..sent {
            let leg = self.rng.gen_range_usize(0..amounts.len());
            amounts[leg] += 1;
        }

        let legs: Vec<(Position, u32)> = destinations.into_iter().zip(amounts).collect();
        TerritoryAction::split(&legs)
    }

    /// Random legal actions for every territory `owner` holds on `board`.
    pub fn actions_for(&mut self, board: &Board, owner: Owner) -> PlayerTurnActions {
        let mut actions = PlayerTurnActions::new();

        for source in board.positions_owned_by(owner) {
            let stones = board.stones_at(source).unwrap_or(0);
            let neighbors: Vec<Position> = board.neighbors(source).collect();

            let action = if stones == 0 || neighbors.is_empty() || self.rng.roll(self.grow_chance) {
                TerritoryAction::Grow
            } else {
                self.random_move(neighbors, stones)
            };
            trace!(%source, ?action, "random action");
            actions.push(source, action);
        }

        actions
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_setup(&mut self, state: &GameState, owner: Owner, config: &GameConfig) -> SetupAction {
        let mut free: Vec<Position> = config
            .setup_zone(owner)
            .filter(|&pos| state.board().get(pos).is_some_and(|t| t.is_neutral()))
            .collect();
        let positions = self.sample(&mut free, config.setup.territories_per_player);
        SetupAction::new(owner, positions)
    }

    fn choose_actions(&mut self, state: &GameState, owner: Owner, _config: &GameConfig) -> PlayerTurnActions {
        self.actions_for(state.board(), owner)
    }
}
