//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `choose_move` call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Simulations performed.
    pub simulations: u32,

    /// Nodes expanded (children enumerated).
    pub nodes_expanded: u32,

    /// Random playouts run.
    pub rollouts: u32,

    /// Simulations settled by minimax at the stopping node.
    pub exact_leaf_outcomes: u32,

    /// Selections cut short by the loop guard.
    pub loops_detected: u32,

    /// Longest simulation path (root = 0).
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,

    /// Whether the move came from the exact root check.
    pub exact_move: bool,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate simulations per second.
    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.simulations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of simulations that needed a random playout.
    #[must_use]
    pub fn rollout_ratio(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.rollouts as f64 / self.simulations as f64
        }
    }
}
