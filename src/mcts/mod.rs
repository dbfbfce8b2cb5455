//! Hybrid minimax + Monte Carlo search.
//!
//! ## Overview
//!
//! - **Node table**: one node per (board, player to move), shared by every
//!   simulation. The search graph may contain cycles.
//! - **Exact check**: a bounded minimax decides positions near a completed
//!   line and caches its verdict on the node.
//! - **Simulations**: heuristic-weighted UCB1 selection with a loop guard,
//!   random playouts, signed backpropagation.
//!
//! ## Usage
//!
//! ```rust
//! use quixo_mcts::core::{Board, PlayerId};
//! use quixo_mcts::games::quixo::QuixoRules;
//! use quixo_mcts::mcts::{MCTSConfig, MCTSSearch};
//!
//! let config = MCTSConfig::default().with_simulations(50);
//! let mut search = MCTSSearch::new(QuixoRules, config);
//!
//! let action = search.choose_move(&Board::empty(), PlayerId::ZERO).unwrap();
//! println!("best action: {}", action);
//! println!("simulations: {}", search.stats().simulations);
//! ```
//!
//! ## Custom Policies
//!
//! ```rust,ignore
//! let search = MCTSSearch::new(engine, config)
//!     .with_selection(MySelection)
//!     .with_simulation(MyPlayout);
//! ```

pub mod config;
pub mod minimax;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod table;

// Re-export main types
pub use config::MCTSConfig;
pub use minimax::{minimax, static_heuristic, win_possible, MinimaxResult};
pub use node::{Edge, NodeId, Outcome, SearchNode};
pub use policy::{HeuristicUcb1, RandomSimulation, SelectionPolicy, SimulationPolicy};
pub use search::{MCTSSearch, Path, Simulation};
pub use stats::SearchStats;
pub use table::{NodeTable, TableStats};
