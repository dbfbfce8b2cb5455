//! # quixo-mcts
//!
//! Move selection for Quixo, the 5x5 sliding-cube game.
//!
//! ## Design Principles
//!
//! 1. **Shared positions**: every (board, player to move) pair maps to one
//!    search node, however many move orders reach it.
//!
//! 2. **Exact first**: a shallow minimax is tried before any simulation, so
//!    forced wins are never left to chance.
//!
//! 3. **Deterministic**: all randomness flows from one seeded RNG.
//!
//! ## Modules
//!
//! - `core`: Players, board, actions, canonical keys, RNG
//! - `rules`: RulesEngine trait consumed by the search
//! - `mcts`: Node table, minimax, selection/rollout policies, search driver
//! - `games`: Quixo rules and a match driver

pub mod core;
pub mod games;
pub mod mcts;
pub mod rules;

use thiserror::Error;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, BoardKey, Cell, GameRng, GameRngState, NodeKey, PlayerId, Position, Slide,
};

pub use crate::rules::RulesEngine;

pub use crate::mcts::{
    Edge, HeuristicUcb1, MCTSConfig, MCTSSearch, MinimaxResult, NodeId, NodeTable, Outcome,
    RandomSimulation, SearchNode, SearchStats, SelectionPolicy, Simulation, SimulationPolicy,
    TableStats,
};

pub use crate::games::quixo::{play_match, MatchResult, MovePicker, QuixoRules, RandomMover};

/// Errors surfaced by the search and the match driver.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The player to move has no legal action.
    #[error("no legal actions for the player to move")]
    NoLegalActions,

    /// A simulation was started from a node whose children are unknown.
    #[error("root node {0} has not been expanded")]
    RootNotExpanded(NodeId),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A move picker returned an action the rules reject.
    #[error("illegal action {0}")]
    IllegalAction(Action),
}

/// Result alias for fallible search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
