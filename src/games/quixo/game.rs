//! Match driver: two move pickers alternate until a line is completed.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, GameRng, PlayerId};
use crate::mcts::MCTSSearch;
use crate::rules::RulesEngine;
use crate::{Result, SearchError};

/// Anything that can choose a move for a player.
pub trait MovePicker {
    /// Pick the action `player` plays on `board`.
    fn pick(&mut self, board: &Board, player: PlayerId) -> Result<Action>;
}

impl<E: RulesEngine> MovePicker for MCTSSearch<E> {
    fn pick(&mut self, board: &Board, player: PlayerId) -> Result<Action> {
        self.choose_move(board, player)
    }
}

/// Plays a uniformly random legal action.
pub struct RandomMover<E: RulesEngine> {
    engine: E,
    rng: GameRng,
}

impl<E: RulesEngine> RandomMover<E> {
    /// Create a random mover with its own seed.
    pub fn new(engine: E, seed: u64) -> Self {
        Self {
            engine,
            rng: GameRng::new(seed),
        }
    }
}

impl<E: RulesEngine> MovePicker for RandomMover<E> {
    fn pick(&mut self, board: &Board, player: PlayerId) -> Result<Action> {
        let actions = self.engine.legal_actions(board, player);
        self.rng
            .choose(&actions)
            .map(|(action, _)| *action)
            .ok_or(SearchError::NoLegalActions)
    }
}

/// Outcome of a finished match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winner, or `None` if the ply limit was reached first.
    pub winner: Option<PlayerId>,

    /// Actions in the order they were played.
    pub moves: Vec<Action>,

    /// Board after the last move.
    pub final_board: Board,
}

impl MatchResult {
    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Play `first` against the other picker from an empty board.
///
/// `pickers[i]` moves for player `i`. A player left without a legal action
/// loses. `max_plies` of 0 means no limit.
pub fn play_match<E: RulesEngine>(
    rules: &E,
    pickers: [&mut dyn MovePicker; 2],
    first: PlayerId,
    max_plies: u32,
) -> Result<MatchResult> {
    let [p0, p1] = pickers;
    let mut board = Board::empty();
    let mut turn = first;
    let mut moves = Vec::new();

    let winner = loop {
        if let Some(winner) = rules.check_win(&board) {
            break Some(winner);
        }
        if !rules.has_legal_action(&board, turn) {
            break Some(turn.opponent());
        }
        if max_plies > 0 && moves.len() >= max_plies as usize {
            break None;
        }

        let picker: &mut dyn MovePicker = if turn == PlayerId::ZERO { &mut *p0 } else { &mut *p1 };
        let action = picker.pick(&board, turn)?;
        board = rules
            .successor(&board, turn, &action)
            .ok_or(SearchError::IllegalAction(action))?;
        debug!("ply {}: {} plays {}", moves.len() + 1, turn, action);

        moves.push(action);
        turn = turn.opponent();
    };

    Ok(MatchResult {
        winner,
        moves,
        final_board: board,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, Slide};
    use crate::games::quixo::QuixoRules;

    struct Scripted(Vec<Action>);

    impl MovePicker for Scripted {
        fn pick(&mut self, _board: &Board, _player: PlayerId) -> Result<Action> {
            if self.0.is_empty() {
                return Err(SearchError::NoLegalActions);
            }
            Ok(self.0.remove(0))
        }
    }

    fn take_top(col: u8) -> Action {
        Action::new(Position::new(col, 4), Slide::Top)
    }

    #[test]
    fn test_scripted_line_wins() {
        // Player 0 pushes a cube into the top of each column; player 1 keeps
        // re-pushing the same bottom-right corner.
        let mut zero = Scripted((0..5).map(take_top).collect());
        let mut one = Scripted(vec![Action::new(Position::new(4, 4), Slide::Left); 4]);

        let result = play_match(&QuixoRules, [&mut zero, &mut one], PlayerId::ZERO, 0).unwrap();

        assert_eq!(result.winner, Some(PlayerId::ZERO));
        assert_eq!(result.plies(), 9);
        assert_eq!(QuixoRules.check_win(&result.final_board), Some(PlayerId::ZERO));
    }

    #[test]
    fn test_illegal_action_is_rejected() {
        // Interior cells cannot be taken.
        let mut zero = Scripted(vec![Action::new(Position::new(2, 2), Slide::Top)]);
        let mut one = Scripted(vec![]);

        let result = play_match(&QuixoRules, [&mut zero, &mut one], PlayerId::ZERO, 0);

        assert!(matches!(result, Err(SearchError::IllegalAction(_))));
    }

    #[test]
    fn test_ply_limit_is_a_draw() {
        let mut zero = RandomMover::new(QuixoRules, 1);
        let mut one = RandomMover::new(QuixoRules, 2);

        let result = play_match(&QuixoRules, [&mut zero, &mut one], PlayerId::ONE, 1).unwrap();

        assert_eq!(result.winner, None);
        assert_eq!(result.plies(), 1);
        assert_eq!(result.final_board.count(PlayerId::ONE), 1);
    }

    #[test]
    fn test_random_movers_finish() {
        let mut zero = RandomMover::new(QuixoRules, 11);
        let mut one = RandomMover::new(QuixoRules, 12);

        let result = play_match(&QuixoRules, [&mut zero, &mut one], PlayerId::ZERO, 0).unwrap();

        let winner = result.winner.unwrap();
        assert_eq!(QuixoRules.check_win(&result.final_board), Some(winner));
    }
}
