//! Core value types: players, board, actions, canonical keys, RNG.
//!
//! Everything here is a plain value. The search never mutates a `Board`;
//! it asks the rules engine for successor boards instead.

pub mod action;
pub mod board;
pub mod key;
pub mod player;
pub mod rng;

pub use action::{Action, Slide};
pub use board::{Board, Cell, Position, BOARD_SIZE, CELL_COUNT};
pub use key::{BoardKey, NodeKey};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
