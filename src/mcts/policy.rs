//! MCTS policies for selection and rollouts.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: Which simulated child to descend into
//! - `SimulationPolicy`: How to play a position out to a winner

use crate::core::{Board, GameRng, PlayerId};
use crate::rules::RulesEngine;

use super::config::MCTSConfig;
use super::minimax::static_heuristic;
use super::node::NodeId;
use super::table::NodeTable;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child node to explore.
pub trait SelectionPolicy: Send + Sync {
    /// Select one of `candidates`, all of which have at least one simulation.
    ///
    /// `mover` is the player to move at the parent. Returns `None` only when
    /// `candidates` is empty.
    fn select(
        &self,
        table: &NodeTable,
        mover: PlayerId,
        candidates: &[NodeId],
        config: &MCTSConfig,
    ) -> Option<NodeId>;
}

/// UCB1 modulated by the minimax heuristic.
///
/// Formula: (a * s * h(c) + (1 - a) * w(c) / n(c)) * sqrt(2 ln(N) / n(c))
///
/// where `a` is `config.heuristic_weight`, `s` is the mover's sign, `h` the
/// child's cached heuristic, `w / n` its mean signed score over `n`
/// simulations, and `N` the total simulations across `candidates`.
#[derive(Clone, Debug, Default)]
pub struct HeuristicUcb1;

impl HeuristicUcb1 {
    /// Score a single child.
    #[must_use]
    pub fn score(
        heuristic: f64,
        mean_score: f64,
        simulations: u32,
        total: u32,
        mover: PlayerId,
        weight: f64,
    ) -> f64 {
        let exploitation = weight * mover.sign() * heuristic + (1.0 - weight) * mean_score;
        let exploration = (2.0 * (total as f64).ln() / simulations as f64).sqrt();
        exploitation * exploration
    }
}

impl SelectionPolicy for HeuristicUcb1 {
    fn select(
        &self,
        table: &NodeTable,
        mover: PlayerId,
        candidates: &[NodeId],
        config: &MCTSConfig,
    ) -> Option<NodeId> {
        let total: u32 = candidates.iter().map(|&c| table.get(c).simulations).sum();

        // Strict `>` keeps the first of equal scores.
        let mut best: Option<(NodeId, f64)> = None;
        for &child in candidates {
            let node = table.get(child);
            let score = Self::score(
                node.minimax_heuristic,
                node.mean_score(),
                node.simulations,
                total,
                mover,
                config.heuristic_weight,
            );
            if best.map_or(true, |(_, b)| score > b) {
                best = Some((child, score));
            }
        }
        best.map(|(child, _)| child)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for playing a position out to a winner.
pub trait SimulationPolicy<E: RulesEngine>: Send + Sync {
    /// Play from `board` with `turn` to move and return the winner.
    ///
    /// `max_plies` of 0 means no limit.
    fn simulate(
        &self,
        engine: &E,
        board: &Board,
        turn: PlayerId,
        rng: &mut GameRng,
        max_plies: u32,
    ) -> PlayerId;
}

/// Random simulation policy.
///
/// Plays uniformly random legal actions alternately until a line is
/// completed. A player with no legal action loses.
#[derive(Clone, Debug, Default)]
pub struct RandomSimulation;

impl<E: RulesEngine> SimulationPolicy<E> for RandomSimulation {
    fn simulate(
        &self,
        engine: &E,
        board: &Board,
        turn: PlayerId,
        rng: &mut GameRng,
        max_plies: u32,
    ) -> PlayerId {
        let mut board = *board;
        let mut turn = turn;
        let mut plies = 0;

        loop {
            if let Some(winner) = engine.check_win(&board) {
                return winner;
            }

            if max_plies > 0 && plies >= max_plies {
                return leader(&board, turn.opponent());
            }

            let actions = engine.legal_actions(&board, turn);
            match rng.choose(&actions) {
                Some((_, next)) => board = *next,
                None => return turn.opponent(),
            }

            turn = turn.opponent();
            plies += 1;
        }
    }
}

/// Player with the longer line, or `tie_break` when level.
fn leader(board: &Board, tie_break: PlayerId) -> PlayerId {
    let h = static_heuristic(board);
    if h > 0.0 {
        PlayerId::ZERO
    } else if h < 0.0 {
        PlayerId::ONE
    } else {
        tie_break
    }
}
