//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

use crate::{Result, SearchError};

/// MCTS configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Simulations run per move when no exact win is found.
    pub simulations: u32,

    /// Depth of the exact check at the root before any simulation.
    pub root_minimax_depth: u32,

    /// Depth of the exact check where a simulation stops (0 = terminal lookup).
    pub leaf_minimax_depth: u32,

    /// Weight of the minimax heuristic against the win rate in selection.
    /// Must lie in [0, 1]; 0 gives plain win-rate UCB1.
    pub heuristic_weight: f64,

    /// Random seed for the search RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,

    /// Rollout ply limit (0 = unlimited).
    /// At the limit the player with the longer line wins.
    pub max_rollout_plies: u32,

    /// Nodes to pre-allocate in the node table.
    pub initial_capacity: usize,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            simulations: 300,
            root_minimax_depth: 4,
            leaf_minimax_depth: 0,
            heuristic_weight: 0.8,
            seed: 42,
            max_rollout_plies: 0,
            initial_capacity: 4096,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with a custom simulation budget.
    pub fn with_simulations(mut self, simulations: u32) -> Self {
        self.simulations = simulations;
        self
    }

    /// Create a new config with a custom root minimax depth.
    pub fn with_root_minimax_depth(mut self, depth: u32) -> Self {
        self.root_minimax_depth = depth;
        self
    }

    /// Create a new config with a custom leaf minimax depth.
    pub fn with_leaf_minimax_depth(mut self, depth: u32) -> Self {
        self.leaf_minimax_depth = depth;
        self
    }

    /// Create a new config with a custom heuristic weight.
    pub fn with_heuristic_weight(mut self, weight: f64) -> Self {
        self.heuristic_weight = weight;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a rollout ply limit.
    pub fn with_max_rollout_plies(mut self, plies: u32) -> Self {
        self.max_rollout_plies = plies;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.heuristic_weight) {
            return Err(SearchError::InvalidConfiguration(format!(
                "heuristic_weight must be in [0, 1], got {}",
                self.heuristic_weight
            )));
        }
        Ok(())
    }
}
