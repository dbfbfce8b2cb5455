//! Quixo rules.

use crate::core::{Action, Board, Cell, PlayerId, Position, Slide, BOARD_SIZE};
use crate::rules::RulesEngine;

const LAST: u8 = (BOARD_SIZE - 1) as u8;

/// Quixo rules engine.
///
/// Stateless; cloning is free.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuixoRules;

impl QuixoRules {
    /// Check whether `player` may take the cube at `cell`.
    #[must_use]
    pub fn can_take(board: &Board, cell: Position, player: PlayerId) -> bool {
        cell.is_perimeter()
            && match board.get(cell) {
                Cell::Empty => true,
                Cell::Taken(owner) => owner == player,
            }
    }
}

/// Apply `action` for `player` without legality checks.
///
/// The taken cube always comes back showing the mover's symbol.
#[must_use]
pub fn apply_action(board: &Board, player: PlayerId, action: &Action) -> Board {
    let Position { col, row } = action.cell;
    let mut next = *board;
    let piece = Cell::Taken(player);

    match action.slide {
        Slide::Top => {
            for r in (1..=row).rev() {
                next = next.with(Position::new(col, r), board.get(Position::new(col, r - 1)));
            }
            next.with(Position::new(col, 0), piece)
        }
        Slide::Bottom => {
            for r in row..LAST {
                next = next.with(Position::new(col, r), board.get(Position::new(col, r + 1)));
            }
            next.with(Position::new(col, LAST), piece)
        }
        Slide::Left => {
            for c in (1..=col).rev() {
                next = next.with(Position::new(c, row), board.get(Position::new(c - 1, row)));
            }
            next.with(Position::new(0, row), piece)
        }
        Slide::Right => {
            for c in col..LAST {
                next = next.with(Position::new(c, row), board.get(Position::new(c + 1, row)));
            }
            next.with(Position::new(LAST, row), piece)
        }
    }
}

impl RulesEngine for QuixoRules {
    fn legal_actions(&self, board: &Board, player: PlayerId) -> Vec<(Action, Board)> {
        let mut actions = Vec::with_capacity(44);

        for col in 0..=LAST {
            for row in 0..=LAST {
                let cell = Position::new(col, row);
                if !Self::can_take(board, cell, player) {
                    continue;
                }
                for slide in Slide::ALL {
                    if slide.allowed_from(cell) {
                        let action = Action::new(cell, slide);
                        actions.push((action, apply_action(board, player, &action)));
                    }
                }
            }
        }

        actions
    }

    fn check_win(&self, board: &Board) -> Option<PlayerId> {
        board.complete_line_owner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Board {
        Board::parse(text).unwrap()
    }

    #[test]
    fn test_empty_board_has_44_actions() {
        let actions = QuixoRules.legal_actions(&Board::empty(), PlayerId::ZERO);
        assert_eq!(actions.len(), 44);
    }

    #[test]
    fn test_enumeration_order() {
        let actions = QuixoRules.legal_actions(&Board::empty(), PlayerId::ZERO);
        let first: Vec<_> = actions.iter().take(4).map(|(a, _)| *a).collect();
        assert_eq!(
            first,
            vec![
                Action::new(Position::new(0, 0), Slide::Bottom),
                Action::new(Position::new(0, 0), Slide::Right),
                Action::new(Position::new(0, 1), Slide::Top),
                Action::new(Position::new(0, 1), Slide::Bottom),
            ]
        );
    }

    #[test]
    fn test_opponent_cubes_cannot_be_taken() {
        let board = parse("1.... ..... ..... ..... .....");
        let actions = QuixoRules.legal_actions(&board, PlayerId::ZERO);
        assert_eq!(actions.len(), 42);
        assert!(actions.iter().all(|(a, _)| a.cell != Position::new(0, 0)));

        let own = QuixoRules.legal_actions(&board, PlayerId::ONE);
        assert_eq!(own.len(), 44);
    }

    #[test]
    fn test_interior_cells_are_never_taken() {
        let actions = QuixoRules.legal_actions(&Board::empty(), PlayerId::ONE);
        assert!(actions.iter().all(|(a, _)| a.cell.is_perimeter()));
    }

    #[test]
    fn test_slide_left_shifts_row_right() {
        let board = parse("1.0.. ..... ..... ..... .....");
        let action = Action::new(Position::new(4, 0), Slide::Left);
        let next = apply_action(&board, PlayerId::ZERO, &action);
        assert_eq!(next, parse("01.0. ..... ..... ..... ....."));
    }

    #[test]
    fn test_slide_right_shifts_row_left() {
        let board = parse("..... ..... 1.0.. ..... .....");
        let action = Action::new(Position::new(0, 2), Slide::Right);
        let next = apply_action(&board, PlayerId::ONE, &action);
        assert_eq!(next, parse("..... ..... .0..1 ..... ....."));
    }

    #[test]
    fn test_slide_top_shifts_column_down() {
        let board = parse(".1... ..... .0... ..... .....");
        let action = Action::new(Position::new(1, 4), Slide::Top);
        let next = apply_action(&board, PlayerId::ZERO, &action);
        assert_eq!(next, parse(".0... .1... ..... .0... ....."));
    }

    #[test]
    fn test_slide_bottom_shifts_column_up() {
        let board = parse("....1 ....0 ..... ..... .....");
        let action = Action::new(Position::new(4, 0), Slide::Bottom);
        let next = apply_action(&board, PlayerId::ONE, &action);
        assert_eq!(next, parse("....0 ..... ..... ..... ....1"));
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let board = Board::empty();
        let action = Action::new(Position::new(0, 0), Slide::Right);
        let _ = apply_action(&board, PlayerId::ZERO, &action);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_check_win() {
        assert_eq!(QuixoRules.check_win(&Board::empty()), None);
        let board = parse("..... 11111 ..... ..... .....");
        assert_eq!(QuixoRules.check_win(&board), Some(PlayerId::ONE));
    }

    #[test]
    fn test_successor() {
        let board = Board::empty();
        let action = Action::new(Position::new(2, 0), Slide::Left);
        let next = QuixoRules.successor(&board, PlayerId::ZERO, &action).unwrap();
        assert_eq!(next, parse("0.... ..... ..... ..... ....."));

        let illegal = Action::new(Position::new(2, 2), Slide::Left);
        assert!(QuixoRules.successor(&board, PlayerId::ZERO, &illegal).is_none());
    }
}
