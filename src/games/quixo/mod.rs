//! Quixo: a 5x5 board of cubes, each blank or showing a player's symbol.
//!
//! On your turn take a blank or own cube from the border, then push it back
//! in from the end of its row or column, shifting the line by one. Five of
//! your symbols in a row, column or diagonal wins.

mod game;
mod rules;

pub use game::{play_match, MatchResult, MovePicker, RandomMover};
pub use rules::{apply_action, QuixoRules};
