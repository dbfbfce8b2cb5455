//! Hybrid minimax + MCTS search.
//!
//! `choose_move` first looks for a forced win with a shallow exact search and
//! only falls back to simulations when none exists. Simulations share the
//! node table, so the search graph is a DAG with cycles; each simulation keeps
//! its own path and the loop guard stops a descent that would revisit a node.

use std::time::Instant;

use log::{debug, trace};
use serde::Serialize;
use smallvec::{smallvec, SmallVec};

use crate::core::{Action, Board, GameRng, GameRngState, PlayerId};
use crate::rules::RulesEngine;
use crate::{Result, SearchError};

use super::config::MCTSConfig;
use super::minimax::{self, MinimaxResult};
use super::node::{Edge, NodeId, Outcome};
use super::policy::{HeuristicUcb1, RandomSimulation, SelectionPolicy, SimulationPolicy};
use super::stats::SearchStats;
use super::table::NodeTable;

/// Nodes traversed by one simulation, root first.
pub type Path = SmallVec<[NodeId; 32]>;

/// Record of a single simulation.
#[derive(Clone, Debug, Serialize)]
pub struct Simulation {
    /// Traversed nodes, root first; the last entry is where the descent stopped.
    pub path: Path,

    /// Winner credited during backpropagation.
    pub winner: PlayerId,

    /// Whether the loop guard cut the descent short.
    pub loop_detected: bool,
}

/// Main search context.
///
/// Generic over the rules engine type. Owns the node table, which persists
/// across `choose_move` calls so later moves reuse earlier work.
pub struct MCTSSearch<E: RulesEngine> {
    /// The game rules engine.
    engine: E,

    /// Search configuration.
    config: MCTSConfig,

    /// Transposition table shared by every search on this instance.
    table: NodeTable,

    /// RNG for rollouts.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Rollout policy.
    simulation: Box<dyn SimulationPolicy<E>>,

    /// Search statistics.
    stats: SearchStats,
}

impl<E: RulesEngine> MCTSSearch<E> {
    /// Create a new search context.
    pub fn new(engine: E, config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            engine,
            table: NodeTable::with_capacity(config.initial_capacity),
            config,
            rng,
            selection: Box::new(HeuristicUcb1),
            simulation: Box::new(RandomSimulation),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom rollout policy.
    pub fn with_simulation<S: SimulationPolicy<E> + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Replace the RNG, e.g. to replay from a captured state.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Pick the move for `player` on `board`.
    ///
    /// Returns a forced win from the root minimax check when one exists,
    /// otherwise runs the simulation budget and returns the most-simulated
    /// child's action. Fails with `NoLegalActions` if `player` cannot move.
    pub fn choose_move(&mut self, board: &Board, player: PlayerId) -> Result<Action> {
        self.config.validate()?;
        let start = Instant::now();
        self.stats.reset();

        let root = self.table.resolve(board, player);

        // Re-expand even a visited root so every edge carries this parent's action.
        self.expand(root);
        let edges: Vec<Edge> = self.table.get(root).edges().to_vec();
        if edges.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        self.minimax(root, self.config.root_minimax_depth);

        // A completing move beats a longer forced line.
        let immediate = edges
            .iter()
            .find(|e| self.engine.check_win(&self.table.get(e.child).board()) == Some(player));
        let forced = immediate.or_else(|| {
            edges
                .iter()
                .find(|e| self.table.get(e.child).minimax_value == Outcome::Won(player))
        });
        if let Some(edge) = forced {
            self.stats.exact_move = true;
            self.stats.time_us = start.elapsed().as_micros() as u64;
            debug!("{} plays forced win {}", player, edge.action);
            return Ok(edge.action);
        }

        if edges.len() == 1 {
            self.stats.time_us = start.elapsed().as_micros() as u64;
            return Ok(edges[0].action);
        }

        for _ in 0..self.config.simulations {
            self.simulate(root)?;
        }
        self.stats.time_us = start.elapsed().as_micros() as u64;

        let best = self.robust_child(&edges).ok_or(SearchError::NoLegalActions)?;
        debug!(
            "{} plays {} ({} of {} simulations, table size {})",
            player,
            best.action,
            self.table.get(best.child).simulations,
            self.stats.simulations,
            self.table.len()
        );
        Ok(best.action)
    }

    /// Enumerate `node`'s successors and attach them as edges.
    ///
    /// Two actions reaching the same successor share one edge, labelled with
    /// the first action in enumeration order. Each child's `action` field is
    /// set to the action from this parent.
    pub fn expand(&mut self, node: NodeId) {
        let (board, turn) = {
            let n = self.table.get(node);
            (n.board(), n.turn)
        };

        let actions = self.engine.legal_actions(&board, turn);
        let mut edges: Vec<Edge> = Vec::with_capacity(actions.len());
        for (action, next) in actions {
            let child = self.table.resolve(&next, turn.opponent());
            if edges.iter().any(|e| e.child == child) {
                continue;
            }
            self.table.get_mut(child).action = Some(action);
            edges.push(Edge { action, child });
        }

        self.table.get_mut(node).set_edges(edges);
        self.stats.nodes_expanded += 1;
    }

    /// Run the exact evaluator on `node`, caching into the table.
    pub fn minimax(&mut self, node: NodeId, depth: u32) -> MinimaxResult {
        minimax::minimax(&self.engine, &mut self.table, node, depth)
    }

    /// Run one simulation from `root`, which must already be expanded.
    pub fn simulate(&mut self, root: NodeId) -> Result<Simulation> {
        if !self.table.get(root).visited {
            return Err(SearchError::RootNotExpanded(root));
        }

        let (path, loop_detected) = self.descend(root);
        let leaf = path[path.len() - 1];

        if !self.table.get(leaf).visited {
            self.expand(leaf);
        }

        let winner = self.playout(leaf);
        self.backpropagate(&path, winner);

        self.stats.simulations += 1;
        let depth = (path.len() - 1) as u16;
        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }
        trace!("simulation depth {} -> winner {}", depth, winner);

        Ok(Simulation {
            path,
            winner,
            loop_detected,
        })
    }

    /// Credit `winner` along `path` (root first).
    ///
    /// Every node gains one simulation. A node's score moves +1 when the
    /// player who chose it (the previous node's mover; for the root, the
    /// opponent of its mover) is the winner, and -1 otherwise.
    pub fn backpropagate(&mut self, path: &[NodeId], winner: PlayerId) {
        let Some(&first) = path.first() else {
            return;
        };

        let mut chooser = self.table.get(first).turn.opponent();
        for &id in path {
            let node = self.table.get_mut(id);
            node.simulations += 1;
            node.wins += if chooser == winner { 1 } else { -1 };
            chooser = node.turn;
        }
    }

    /// Selection: walk down from `root` until a stopping node.
    ///
    /// Returns the path and whether the loop guard fired.
    fn descend(&mut self, root: NodeId) -> (Path, bool) {
        let mut path: Path = smallvec![root];
        let mut current = root;

        loop {
            let node = self.table.get(current);
            if !node.visited || node.child_count() == 0 {
                break;
            }
            if current != root && node.minimax_value.is_determined() {
                break;
            }

            let mover = node.turn;
            let proven_loss = Outcome::Won(mover.opponent());
            let mut candidates: SmallVec<[NodeId; 64]> = node
                .children()
                .filter(|&c| self.table.get(c).minimax_value != proven_loss)
                .collect();
            if candidates.is_empty() {
                candidates = node.children().collect();
            }

            let unsimulated = candidates
                .iter()
                .copied()
                .find(|&c| self.table.get(c).simulations == 0);
            let next = match unsimulated {
                Some(child) => child,
                None => match self.selection.select(&self.table, mover, &candidates, &self.config) {
                    Some(child) => child,
                    None => break,
                },
            };

            if path.contains(&next) {
                self.stats.loops_detected += 1;
                return (path, true);
            }
            path.push(next);

            if unsimulated.is_some() {
                break;
            }
            current = next;
        }

        (path, false)
    }

    /// Decide the winner from the stopping node: exact lookup, else a rollout.
    fn playout(&mut self, leaf: NodeId) -> PlayerId {
        let result = self.minimax(leaf, self.config.leaf_minimax_depth);
        if let Some(winner) = result.winner.winner() {
            self.stats.exact_leaf_outcomes += 1;
            return winner;
        }

        let node = self.table.get(leaf);
        let (board, turn) = (node.board(), node.turn);
        let mut rng = self.rng.fork();
        self.stats.rollouts += 1;
        self.simulation
            .simulate(&self.engine, &board, turn, &mut rng, self.config.max_rollout_plies)
    }

    /// Most-simulated edge; ties go to the earliest edge.
    fn robust_child(&self, edges: &[Edge]) -> Option<Edge> {
        let mut best: Option<(Edge, u32)> = None;
        for &edge in edges {
            let sims = self.table.get(edge.child).simulations;
            if best.map_or(true, |(_, b)| sims > b) {
                best = Some((edge, sims));
            }
        }
        best.map(|(edge, _)| edge)
    }

    /// Drop all cached nodes, e.g. between games.
    pub fn reset(&mut self) {
        self.table.clear();
        self.stats.reset();
    }

    /// Get search statistics for the last `choose_move`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the node table.
    #[must_use]
    pub fn table(&self) -> &NodeTable {
        &self.table
    }

    /// Get the node table mutably.
    pub fn table_mut(&mut self) -> &mut NodeTable {
        &mut self.table
    }

    /// Capture the RNG state.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
