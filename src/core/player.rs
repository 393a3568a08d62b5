//! Player identification and hands.
//!
//! ## PlayerId
//!
//! Opaque, stable string identifier handed to the engine by the room layer.
//! The engine never interprets it beyond equality.
//!
//! ## Player
//!
//! A seat at the table: identifier plus the cards currently held. Hands use
//! `im::Vector` so that cloning a whole `GameState` stays O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::card::Card;

/// Player identifier.
///
/// ```
/// use bluff_engine::core::PlayerId;
///
/// let id = PlayerId::new("alice");
/// assert_eq!(id.as_str(), "alice");
/// assert_eq!(id, PlayerId::from("alice"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A player and the cards in their hand.
///
/// Hand order is deal order followed by any picked-up pile, in pile order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub hand: Vector<Card>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            hand: Vector::new(),
        }
    }

    /// Create a player holding the given cards.
    #[must_use]
    pub fn with_hand(id: impl Into<PlayerId>, hand: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id: id.into(),
            hand: hand.into_iter().collect(),
        }
    }

    /// Number of cards held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Whether the player has no cards left.
    #[must_use]
    pub fn has_empty_hand(&self) -> bool {
        self.hand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    #[test]
    fn test_player_id_basics() {
        let id = PlayerId::new("a");
        assert_eq!(id.as_str(), "a");
        assert_eq!(format!("{}", id), "a");
        assert_eq!(PlayerId::from(String::from("a")), id);
    }

    #[test]
    fn test_player_with_hand() {
        let ace = Card::new(Suit::Clubs, Rank::Ace);
        let two = Card::new(Suit::Hearts, Rank::Two);
        let player = Player::with_hand("a", [ace, two]);

        assert_eq!(player.hand_size(), 2);
        assert_eq!(player.hand.iter().copied().collect::<Vec<_>>(), vec![ace, two]);
        assert!(!player.has_empty_hand());
        assert!(Player::new("b").has_empty_hand());
    }

    #[test]
    fn test_player_id_serializes_as_string() {
        let id = PlayerId::new("user-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""user-42""#);

        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::with_hand("a", [Card::new(Suit::Spades, Rank::King)]);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
