//! Action representation: a perimeter cell plus the side it is pushed back in from.
//!
//! A move takes a cube from the outer ring and reinserts it at one end of its
//! row or column, sliding the cubes in between one step towards the gap.
//! The side the cube currently sits on is never a legal slide.

use serde::{Deserialize, Serialize};

use super::board::Position;

/// Side of the board a taken cube is pushed back in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slide {
    /// Reinsert at row 0; the column shifts down.
    Top,
    /// Reinsert at row 4; the column shifts up.
    Bottom,
    /// Reinsert at column 0; the row shifts right.
    Left,
    /// Reinsert at column 4; the row shifts left.
    Right,
}

impl Slide {
    /// All slides in enumeration order.
    pub const ALL: [Slide; 4] = [Slide::Top, Slide::Bottom, Slide::Left, Slide::Right];

    /// Check whether this slide can be played from `cell`.
    ///
    /// A cube already on the top edge cannot be pushed in from the top, and so on.
    #[must_use]
    pub fn allowed_from(self, cell: Position) -> bool {
        match self {
            Slide::Top => cell.row != 0,
            Slide::Bottom => cell.row != 4,
            Slide::Left => cell.col != 0,
            Slide::Right => cell.col != 4,
        }
    }
}

/// A complete game action.
///
/// ```
/// use quixo_mcts::core::{Action, Position, Slide};
///
/// let action = Action::new(Position::new(0, 2), Slide::Right);
/// assert_eq!(action.to_string(), "(0, 2) Right");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The perimeter cell whose cube is taken.
    pub cell: Position,

    /// Where the cube is pushed back in.
    pub slide: Slide,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(cell: Position, slide: Slide) -> Self {
        Self { cell, slide }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.cell, self.slide)
    }
}
