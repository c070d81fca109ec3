//! Deterministic random number generation.
//!
//! The rules core never owns or seeds randomness. Callers pass a
//! [`RandomSource`] into turn resolution; the resolver draws from it in a
//! fixed order, so the same seed always produces the same turn.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent branches for lookahead simulations
//! - **Serializable**: O(1) state capture and restore
//! - **Context streams**: Independent sequences for different purposes
//!
//! ## Lookahead Usage
//!
//! ```
//! use rust_territory::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for a simulated branch; the parent stream is untouched.
//! let mut sim_rng = rng.fork();
//! let _ = sim_rng.roll(0.5);
//!
//! // Forks are deterministic - same fork counter = same sequence
//! let mut rng2 = GameRng::new(42);
//! let mut sim_rng2 = rng2.fork();
//! assert_eq!(sim_rng2.seed(), sim_rng.seed());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Source of Bernoulli trials for combat and expansion.
///
/// Implementations must be deterministic for a given starting state.
/// Never share one stream between concurrently running simulations.
pub trait RandomSource {
    /// Draw one trial that succeeds with the given probability.
    ///
    /// `probability` is in `[0.0, 1.0]`.
    fn roll(&mut self, probability: f64) -> bool;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, probability: f64) -> bool {
        (**self).roll(probability)
    }
}

/// Deterministic RNG with forking for simulations.
///
/// Uses ChaCha8 for speed while keeping high-quality, portable output.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to give every simulated game or lookahead branch its own stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(GOLDEN));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// Useful for separating randomness domains (e.g. agent choices vs.
    /// turn resolution). The same context always produces the same stream
    /// from the same seed, on every platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random u32 in the given inclusive range.
    pub fn gen_range_u32(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;

/// Fold `context` into `seed` one byte at a time, then mix in its length.
fn context_seed(seed: u64, context: &str) -> u64 {
    let mix = |hash: u64, word: u64| (hash.rotate_left(5) ^ word).wrapping_mul(GOLDEN);
    let folded = context.bytes().fold(seed, |hash, byte| mix(hash, u64::from(byte)));
    mix(folded, context.len() as u64)
}

impl RandomSource for GameRng {
    fn roll(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Wraps a source and records every outcome it produces.
///
/// Pair with [`ReplayRng`] to reproduce a turn without the original seed.
#[derive(Clone, Debug)]
pub struct RecordingRng<R> {
    inner: R,
    outcomes: Vec<bool>,
}

impl<R: RandomSource> RecordingRng<R> {
    /// Start recording draws from `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            outcomes: Vec::new(),
        }
    }

    /// Outcomes drawn so far, in order.
    #[must_use]
    pub fn outcomes(&self) -> &[bool] {
        &self.outcomes
    }

    /// Stop recording, returning the wrapped source and the outcomes.
    pub fn into_parts(self) -> (R, Vec<bool>) {
        (self.inner, self.outcomes)
    }
}

impl<R: RandomSource> RandomSource for RecordingRng<R> {
    fn roll(&mut self, probability: f64) -> bool {
        let outcome = self.inner.roll(probability);
        self.outcomes.push(outcome);
        outcome
    }
}

/// Replays a fixed sequence of outcomes, ignoring the probability.
///
/// Once the sequence is used up every further roll succeeds, so combat
/// still terminates; `overrun` reports how many rolls went past the end.
///
/// ```
/// use rust_territory::core::{RandomSource, ReplayRng};
///
/// let mut rng = ReplayRng::new([false, true]);
/// assert!(!rng.roll(0.9));
/// assert!(rng.roll(0.1));
/// assert!(rng.is_exhausted());
/// assert_eq!(rng.overrun(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReplayRng {
    outcomes: VecDeque<bool>,
    overrun: usize,
}

impl ReplayRng {
    /// Replay the given outcomes in order.
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            overrun: 0,
        }
    }

    /// Check if every scripted outcome has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }

    /// Rolls requested after the script ran out.
    #[must_use]
    pub fn overrun(&self) -> usize {
        self.overrun
    }
}

impl RandomSource for ReplayRng {
    fn roll(&mut self, _probability: f64) -> bool {
        match self.outcomes.pop_front() {
            Some(outcome) => outcome,
            None => {
                self.overrun += 1;
                true
            }
        }
    }
}

/// Serializable RNG state for checkpointing and replay.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of
/// how many trials have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolls(rng: &mut GameRng, n: usize) -> Vec<bool> {
        (0..n).map(|_| rng.roll(0.5)).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rolls(&mut rng1, 200), rolls(&mut rng2, 200));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(rolls(&mut rng1, 64), rolls(&mut rng2, 64));
    }

    #[test]
    fn test_certain_and_impossible_rolls() {
        let mut rng = GameRng::new(7);

        for _ in 0..100 {
            assert!(rng.roll(1.0));
            assert!(!rng.roll(0.0));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(rolls(&mut rng, 64), rolls(&mut forked, 64));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut forked1 = rng1.fork();
        let mut forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_eq!(rolls(&mut forked1, 32), rolls(&mut forked2, 32));
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut agents = rng.for_context("agents");
        let mut resolution = rng.for_context("resolution");
        let mut agents_again = GameRng::new(42).for_context("agents");

        let seq = rolls(&mut agents, 64);
        assert_ne!(seq, rolls(&mut resolution, 64));
        assert_eq!(seq, rolls(&mut agents_again, 64));
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        let _ = rolls(&mut rng, 100);

        let state = rng.state();
        let expected = rolls(&mut rng, 10);

        let mut restored = GameRng::from_state(&state);
        assert_eq!(expected, rolls(&mut restored, 10));
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_record_then_replay() {
        let mut recorder = RecordingRng::new(GameRng::new(9));
        let drawn: Vec<_> = (0..20).map(|_| recorder.roll(0.3)).collect();

        let (_, outcomes) = recorder.into_parts();
        assert_eq!(outcomes, drawn);

        let mut replay = ReplayRng::new(outcomes);
        let replayed: Vec<_> = (0..20).map(|_| replay.roll(0.3)).collect();
        assert_eq!(replayed, drawn);
        assert!(replay.is_exhausted());
    }

    #[test]
    fn test_replay_overrun_hits() {
        let mut replay = ReplayRng::new([false]);

        assert!(!replay.roll(0.0));
        assert!(replay.roll(0.0));
        assert!(replay.roll(0.0));
        assert_eq!(replay.overrun(), 2);
        assert_eq!(replay.remaining(), 0);
    }

    #[test]
    fn test_context_seed_is_pinned() {
        // Stored (seed, context) pairs must keep replaying the same stream.
        assert_eq!(GameRng::new(42).for_context("agents").seed(), 0x8e96_a36c_4bcc_c42f);
        assert_eq!(GameRng::new(42).for_context("resolution").seed(), 0xee96_6c18_f991_ad3b);
        assert_ne!(GameRng::new(42).for_context("").seed(), 42);
    }
}
