//! Bounded-depth exact search with a heuristic cutoff.
//!
//! `minimax` decides positions close enough to a completed line and caches the
//! answer on the node. A determined winner is permanent. An undetermined result
//! is tagged with the depth it was computed at, so a later call with a larger
//! budget can refine it while equal or smaller budgets are answered from cache
//! without touching the rules engine.

use serde::{Deserialize, Serialize};

use super::node::{NodeId, Outcome};
use super::table::NodeTable;
use crate::core::{Board, PlayerId, BOARD_SIZE};
use crate::rules::RulesEngine;

/// Winner (if forced) and heuristic score of a position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinimaxResult {
    /// Forced outcome within the searched depth.
    pub winner: Outcome,

    /// Score in [-1, 1], positive favours player 0.
    pub heuristic: f64,
}

impl MinimaxResult {
    /// A forced win; the heuristic saturates towards the winner.
    #[must_use]
    pub fn won(player: PlayerId) -> Self {
        Self {
            winner: Outcome::Won(player),
            heuristic: player.sign(),
        }
    }

    /// No forced win; carry a heuristic estimate.
    #[must_use]
    pub fn undetermined(heuristic: f64) -> Self {
        Self {
            winner: Outcome::Undetermined,
            heuristic,
        }
    }
}

/// Difference between both players' longest lines, scaled to [-1, 1].
#[must_use]
pub fn static_heuristic(board: &Board) -> f64 {
    let zero = board.longest_line(PlayerId::ZERO) as f64;
    let one = board.longest_line(PlayerId::ONE) as f64;
    (zero - one) / BOARD_SIZE as f64
}

/// Cheap necessary condition for a result inside `depth` plies.
///
/// True if either player is at most `depth` pieces away from a full line.
#[must_use]
pub fn win_possible(board: &Board, turn: PlayerId, depth: u32) -> bool {
    let needed = |player: PlayerId| (BOARD_SIZE - board.longest_line(player)) as u32;
    depth > 0 && (needed(turn) <= depth || needed(turn.opponent()) <= depth)
}

/// Evaluate `node` to `depth` plies, caching into the table.
pub fn minimax<E: RulesEngine>(
    engine: &E,
    table: &mut NodeTable,
    node: NodeId,
    depth: u32,
) -> MinimaxResult {
    let cached = table.get(node);
    if cached.minimax_covers(depth) {
        return MinimaxResult {
            winner: cached.minimax_value,
            heuristic: cached.minimax_heuristic,
        };
    }

    let board = cached.board();
    let turn = cached.turn;

    let result = if let Some(winner) = engine.check_win(&board) {
        MinimaxResult::won(winner)
    } else if win_possible(&board, turn, depth) {
        search_children(engine, table, &board, turn, depth)
    } else {
        MinimaxResult::undetermined(static_heuristic(&board))
    };

    let node = table.get_mut(node);
    node.minimax_value = result.winner;
    node.minimax_heuristic = result.heuristic;
    node.minimax_depth = Some(depth);
    result
}

/// Combine child results one ply down.
///
/// Any child won by the mover wins the node. Otherwise an undetermined child
/// keeps the node undetermined with the mover's best heuristic among those
/// children. With neither, every move loses (including having no move).
fn search_children<E: RulesEngine>(
    engine: &E,
    table: &mut NodeTable,
    board: &Board,
    turn: PlayerId,
    depth: u32,
) -> MinimaxResult {
    let mut best: Option<f64> = None;

    for (_, child_board) in engine.legal_actions(board, turn) {
        let child = table.resolve(&child_board, turn.opponent());
        let result = minimax(engine, table, child, depth - 1);

        match result.winner {
            Outcome::Won(winner) if winner == turn => return MinimaxResult::won(turn),
            Outcome::Undetermined => {
                let better = match best {
                    None => true,
                    Some(b) => result.heuristic * turn.sign() > b * turn.sign(),
                };
                if better {
                    best = Some(result.heuristic);
                }
            }
            Outcome::Won(_) => {}
        }
    }

    match best {
        Some(heuristic) => MinimaxResult::undetermined(heuristic),
        None => MinimaxResult::won(turn.opponent()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quixo::QuixoRules;

    fn parse(text: &str) -> Board {
        Board::parse(text).unwrap()
    }

    #[test]
    fn test_static_heuristic() {
        assert_eq!(static_heuristic(&Board::empty()), 0.0);

        let board = parse("000.. ..... ..... ..... 1....");
        assert!((static_heuristic(&board) - 0.4).abs() < 1e-12);

        let board = parse("11111 ..... ..... ..... .....");
        assert_eq!(static_heuristic(&board), -1.0);
    }

    #[test]
    fn test_win_possible() {
        let board = parse("000.. ..... ..... ..... .....");
        assert!(!win_possible(&board, PlayerId::ZERO, 0));
        assert!(!win_possible(&board, PlayerId::ZERO, 1));
        assert!(win_possible(&board, PlayerId::ZERO, 2));
        assert!(win_possible(&board, PlayerId::ONE, 2));
        assert!(!win_possible(&Board::empty(), PlayerId::ZERO, 4));
        assert!(win_possible(&Board::empty(), PlayerId::ZERO, 5));
    }

    #[test]
    fn test_completed_line_is_won_at_depth_zero() {
        let mut table = NodeTable::new();
        let board = parse("..... ..... 11111 ..... .....");
        let node = table.resolve(&board, PlayerId::ZERO);

        let result = minimax(&QuixoRules, &mut table, node, 0);

        assert_eq!(result, MinimaxResult::won(PlayerId::ONE));
        assert_eq!(result.heuristic, -1.0);
        assert_eq!(table.get(node).minimax_depth, Some(0));
    }

    #[test]
    fn test_one_move_from_win() {
        let mut table = NodeTable::new();
        let board = parse("0000. ..... ..... ..... .....");
        let node = table.resolve(&board, PlayerId::ZERO);

        let result = minimax(&QuixoRules, &mut table, node, 1);

        assert_eq!(result.winner, Outcome::Won(PlayerId::ZERO));
        assert_eq!(result.heuristic, 1.0);
    }

    #[test]
    fn test_depth_zero_is_heuristic_only() {
        let mut table = NodeTable::new();
        let board = parse("0000. ..... ..... ..... .....");
        let node = table.resolve(&board, PlayerId::ZERO);

        let result = minimax(&QuixoRules, &mut table, node, 0);

        assert_eq!(result.winner, Outcome::Undetermined);
        assert!((result.heuristic - 0.8).abs() < 1e-12);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_far_from_completion_is_undetermined() {
        let mut table = NodeTable::new();
        let node = table.resolve(&Board::empty(), PlayerId::ZERO);

        let result = minimax(&QuixoRules, &mut table, node, 4);

        assert_eq!(result, MinimaxResult::undetermined(0.0));
        assert_eq!(table.len(), 1);
        assert_eq!(table.stats().determined_count, 0);
    }

    #[test]
    fn test_deeper_budget_refines_cache() {
        let mut table = NodeTable::new();
        let board = parse("0000. ..... ..... ..... .....");
        let node = table.resolve(&board, PlayerId::ZERO);

        assert_eq!(minimax(&QuixoRules, &mut table, node, 0).winner, Outcome::Undetermined);
        assert_eq!(
            minimax(&QuixoRules, &mut table, node, 1).winner,
            Outcome::Won(PlayerId::ZERO)
        );
        assert_eq!(table.get(node).minimax_depth, Some(1));
    }
}
