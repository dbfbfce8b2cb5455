//! Rules engine trait for game implementations.
//!
//! The search consumes exactly two things from the rules:
//! - every legal action for a player, paired with the board it produces
//! - whether a board already holds a completed winning line

use crate::core::{Action, Board, PlayerId};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Must be exhaustive and return actions in a stable order;
///   tie-breaking in the search follows this order.
/// - `legal_actions`: Return an empty vec if the player cannot move.
/// - `check_win`: Pure, no side effects. Return `None` if nobody has won yet.
pub trait RulesEngine {
    /// Enumerate every legal action for `player` with its resulting board.
    fn legal_actions(&self, board: &Board, player: PlayerId) -> Vec<(Action, Board)>;

    /// Detect a completed winning line for either player.
    fn check_win(&self, board: &Board) -> Option<PlayerId>;

    // === Convenience Methods ===

    /// Check whether `player` has at least one legal action.
    fn has_legal_action(&self, board: &Board, player: PlayerId) -> bool {
        !self.legal_actions(board, player).is_empty()
    }

    /// Board produced by `action`, if it is legal for `player`.
    fn successor(&self, board: &Board, player: PlayerId, action: &Action) -> Option<Board> {
        self.legal_actions(board, player)
            .into_iter()
            .find(|(a, _)| a == action)
            .map(|(_, next)| next)
    }
}
