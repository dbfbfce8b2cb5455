//! Player identification for a two-player game.
//!
//! Player indices are 0-based: the first player is `PlayerId(0)`.
//! Heuristic scores are signed from player 0's point of view, so
//! `PlayerId::sign` maps a player onto that axis.

use serde::{Deserialize, Serialize};

/// Player identifier, either 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const ZERO: PlayerId = PlayerId(0);

    /// The player who moves second.
    pub const ONE: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "PlayerId must be 0 or 1");
        Self(id)
    }

    /// The other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// +1.0 for player 0, -1.0 for player 1.
    #[inline]
    #[must_use]
    pub fn sign(self) -> f64 {
        if self.0 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id() {
        let p = PlayerId::new(1);
        assert_eq!(p, PlayerId::ONE);
        assert_eq!(format!("{}", p), "Player 1");
    }

    #[test]
    #[should_panic(expected = "PlayerId must be 0 or 1")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::ZERO.opponent(), PlayerId::ONE);
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::ZERO);
        assert_eq!(PlayerId::ZERO.opponent().opponent(), PlayerId::ZERO);
    }

    #[test]
    fn test_sign() {
        assert_eq!(PlayerId::ZERO.sign(), 1.0);
        assert_eq!(PlayerId::ONE.sign(), -1.0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&PlayerId::ONE).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::ONE);
    }
}
