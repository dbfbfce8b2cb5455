//! The 5x5 board.
//!
//! `Board` is a small `Copy` value: every transition produces a new board and
//! nothing in the search mutates one in place. Cells are addressed by
//! `Position { col, row }` with `(0, 0)` in the top-left corner.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Side length of the board.
pub const BOARD_SIZE: usize = 5;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Neutral cube, not yet claimed.
    #[default]
    Empty,
    /// Cube showing a player's symbol.
    Taken(PlayerId),
}

impl Cell {
    /// Check whether this cell belongs to `player`.
    #[inline]
    #[must_use]
    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self == Cell::Taken(player)
    }
}

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, 0 = left edge.
    pub col: u8,
    /// Row, 0 = top edge.
    pub row: u8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Check whether this position lies on the outer ring.
    #[must_use]
    pub const fn is_perimeter(self) -> bool {
        self.col == 0 || self.row == 0 || self.col == 4 || self.row == 4
    }

    #[inline]
    const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Rows, columns and both diagonals: the 12 lines that win the game.
const LINES: [[Position; BOARD_SIZE]; 12] = build_lines();

const fn build_lines() -> [[Position; BOARD_SIZE]; 12] {
    let mut lines = [[Position::new(0, 0); BOARD_SIZE]; 12];
    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            lines[i][j] = Position::new(j as u8, i as u8);
            lines[BOARD_SIZE + i][j] = Position::new(i as u8, j as u8);
            j += 1;
        }
        lines[10][i] = Position::new(i as u8, i as u8);
        lines[11][i] = Position::new((BOARD_SIZE - 1 - i) as u8, i as u8);
        i += 1;
    }
    lines
}

/// An immutable 5x5 grid of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from rows, top row first.
    #[must_use]
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (row, cells) in rows.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                board.cells[row * BOARD_SIZE + col] = cell;
            }
        }
        board
    }

    /// Build a board from a compact text form.
    ///
    /// `.` is empty, `0`/`X` is player 0, `1`/`O` is player 1. Whitespace is
    /// ignored. Returns `None` unless exactly 25 cells are given.
    ///
    /// ```
    /// use quixo_mcts::core::{Board, Cell, PlayerId, Position};
    ///
    /// let board = Board::parse(
    ///     "0000.
    ///      .....
    ///      ..1..
    ///      .....
    ///      .....",
    /// ).unwrap();
    /// assert_eq!(board.get(Position::new(3, 0)), Cell::Taken(PlayerId::ZERO));
    /// assert_eq!(board.get(Position::new(2, 2)), Cell::Taken(PlayerId::ONE));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut board = Self::empty();
        let mut count = 0;
        for ch in text.chars().filter(|c| !c.is_whitespace()) {
            if count == CELL_COUNT {
                return None;
            }
            board.cells[count] = match ch {
                '.' => Cell::Empty,
                '0' | 'X' | 'x' => Cell::Taken(PlayerId::ZERO),
                '1' | 'O' | 'o' => Cell::Taken(PlayerId::ONE),
                _ => return None,
            };
            count += 1;
        }
        (count == CELL_COUNT).then_some(board)
    }

    /// Get the cell at a position.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Return a copy of this board with one cell replaced.
    #[must_use]
    pub fn with(mut self, pos: Position, cell: Cell) -> Self {
        self.cells[pos.index()] = cell;
        self
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of pieces `player` has in their best row, column or diagonal.
    #[must_use]
    pub fn longest_line(&self, player: PlayerId) -> usize {
        LINES
            .iter()
            .map(|line| line.iter().filter(|&&p| self.get(p).is_owned_by(player)).count())
            .max()
            .unwrap_or(0)
    }

    /// Owner of a completed line, if any.
    ///
    /// Lines are scanned rows, then columns, then the two diagonals; when both
    /// players own a complete line the last one found decides.
    #[must_use]
    pub fn complete_line_owner(&self) -> Option<PlayerId> {
        let mut owner = None;
        for line in &LINES {
            if let Cell::Taken(player) = self.get(line[0]) {
                if line.iter().all(|&p| self.get(p) == Cell::Taken(player)) {
                    owner = Some(player);
                }
            }
        }
        owner
    }

    /// Number of cells owned by `player`.
    #[must_use]
    pub fn count(&self, player: PlayerId) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Taken(PlayerId::ZERO);
    const O: Cell = Cell::Taken(PlayerId::ONE);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_lines_cover_rows_columns_diagonals() {
        assert_eq!(LINES[0][4], Position::new(4, 0));
        assert_eq!(LINES[5][4], Position::new(0, 4));
        assert_eq!(LINES[10][3], Position::new(3, 3));
        assert_eq!(LINES[11][0], Position::new(4, 0));
        assert_eq!(LINES[11][4], Position::new(0, 4));
    }

    #[test]
    fn test_perimeter() {
        assert!(Position::new(0, 0).is_perimeter());
        assert!(Position::new(2, 4).is_perimeter());
        assert!(!Position::new(2, 2).is_perimeter());
        assert!(!Position::new(1, 3).is_perimeter());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::empty();
        let next = board.with(Position::new(1, 0), X);

        assert_eq!(board.get(Position::new(1, 0)), E);
        assert_eq!(next.get(Position::new(1, 0)), X);
    }

    #[test]
    fn test_longest_line() {
        let board = Board::from_rows([
            [X, X, E, X, E],
            [E, O, E, E, E],
            [X, E, O, E, E],
            [E, E, E, O, E],
            [X, E, E, E, E],
        ]);

        assert_eq!(board.longest_line(PlayerId::ZERO), 3);
        assert_eq!(board.longest_line(PlayerId::ONE), 3);
        assert_eq!(Board::empty().longest_line(PlayerId::ZERO), 0);
    }

    #[test]
    fn test_complete_line_owner() {
        assert_eq!(Board::empty().complete_line_owner(), None);

        let column = Board::parse("..1.. ..1.. ..1.. ..1.. ..1..").unwrap();
        assert_eq!(column.complete_line_owner(), Some(PlayerId::ONE));

        let anti = Board::parse("....0 ...0. ..0.. .0... 0....").unwrap();
        assert_eq!(anti.complete_line_owner(), Some(PlayerId::ZERO));

        let almost = Board::parse("0000. ..... ..... ..... .....").unwrap();
        assert_eq!(almost.complete_line_owner(), None);
    }

    #[test]
    fn test_both_lines_last_found_wins() {
        let board = Board::parse("11111 ..... ..... ..... 00000").unwrap();
        assert_eq!(board.complete_line_owner(), Some(PlayerId::ZERO));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Board::parse("....").is_none());
        assert!(Board::parse("..........................").is_none());
        assert!(Board::parse("....z ..... ..... ..... .....").is_none());
    }

    #[test]
    fn test_count() {
        let board = Board::parse("0.1.. ..... ..0.. ..... .....").unwrap();
        assert_eq!(board.count(PlayerId::ZERO), 2);
        assert_eq!(board.count(PlayerId::ONE), 1);
    }
}
