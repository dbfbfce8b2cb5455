//! Seeded randomness for rollouts.
//!
//! The search owns one `GameRng` seeded from `MCTSConfig::seed`. Each rollout
//! draws from its own fork, so the sequence of playouts, and with it the chosen
//! move, is fixed by the seed alone.
//!
//! ```
//! use quixo_mcts::core::GameRng;
//!
//! let moves = ["a", "b", "c", "d"];
//!
//! let mut search_rng = GameRng::new(42);
//! let mut rollout = search_rng.fork();
//!
//! let mut replay = GameRng::new(42).fork();
//! assert_eq!(rollout.choose(&moves), replay.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio step between successive fork seeds.
const FORK_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// Rollout random source.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    /// Seed a new generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Derive the generator for the next rollout.
    ///
    /// The n-th fork of a given seed is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STEP)))
    }

    /// Pick one legal move uniformly, `None` if there are none.
    #[must_use]
    pub fn choose<'a, T>(&mut self, moves: &'a [T]) -> Option<&'a T> {
        moves.choose(&mut self.inner)
    }

    /// Capture the generator so a search can be replayed.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Rebuild a generator from a capture.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Snapshot of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Seed the generator was created with.
    pub seed: u64,
    /// Position in the ChaCha8 stream.
    pub word_pos: u128,
    /// Forks handed out so far.
    pub forks: u64,
}
