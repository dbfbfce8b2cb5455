//! Canonical state encoding.
//!
//! A `BoardKey` packs the 25 cells into the low 50 bits of a `u64`, two bits
//! per cell in row-major order (0 = empty, 1 = player 0, 2 = player 1). The
//! encoding is lossless, so equal boards always produce equal keys no matter
//! which move sequence produced them, and a key decodes back to its board.
//!
//! `NodeKey` adds the player to move; it is the identity of a search node.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Position, BOARD_SIZE, CELL_COUNT};
use super::player::PlayerId;

/// Packed, hashable encoding of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardKey(pub u64);

impl BoardKey {
    /// Encode a board.
    #[must_use]
    pub fn encode(board: &Board) -> Self {
        let packed = board
            .cells()
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, cell)| {
                let bits = match cell {
                    Cell::Empty => 0,
                    Cell::Taken(player) => 1 + player.0 as u64,
                };
                acc | (bits << (2 * i))
            });
        Self(packed)
    }

    /// Decode back into a board.
    ///
    /// The unused bit pattern `3` decodes as an empty cell.
    #[must_use]
    pub fn decode(self) -> Board {
        let mut board = Board::empty();
        for i in 0..CELL_COUNT {
            let cell = match (self.0 >> (2 * i)) & 0b11 {
                1 => Cell::Taken(PlayerId::ZERO),
                2 => Cell::Taken(PlayerId::ONE),
                _ => Cell::Empty,
            };
            let pos = Position::new((i % BOARD_SIZE) as u8, (i / BOARD_SIZE) as u8);
            board = board.with(pos, cell);
        }
        board
    }
}

impl From<&Board> for BoardKey {
    fn from(board: &Board) -> Self {
        Self::encode(board)
    }
}

impl Board {
    /// Canonical key for this board.
    #[inline]
    #[must_use]
    pub fn key(&self) -> BoardKey {
        BoardKey::encode(self)
    }
}

/// Identity of a search node: canonical board plus the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeKey {
    /// Canonical board.
    pub board: BoardKey,

    /// Player to move.
    pub turn: PlayerId,
}

impl NodeKey {
    /// Build the key for a board and player to move.
    #[must_use]
    pub fn new(board: &Board, turn: PlayerId) -> Self {
        Self {
            board: board.key(),
            turn,
        }
    }
}
