//! Game event types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::PlayerId;

/// Something notable that happened while applying a move.
///
/// Events are output only. They are never stored in `GameState`; the room
/// layer turns each one into a notification for the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    /// A play left `player_id` without cards. The win is only final once
    /// the next move goes by without a successful challenge.
    PlayerEmptiedHand { player_id: PlayerId },

    /// A bluff call was resolved and `taker_id` picked up the pile.
    PileTaken {
        taker_id: PlayerId,
        bluffer_id: PlayerId,
        challenger_id: PlayerId,
        bluff_was_truthful: bool,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::PlayerEmptiedHand { player_id } => {
                write!(f, "{} emptied their hand", player_id)
            }
            GameEvent::PileTaken {
                taker_id,
                bluffer_id,
                challenger_id,
                bluff_was_truthful,
            } => {
                let verdict = if *bluff_was_truthful { "truthful" } else { "a bluff" };
                write!(
                    f,
                    "{} challenged {}, the play was {}; {} takes the pile",
                    challenger_id, bluffer_id, verdict, taker_id
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let taken = GameEvent::PileTaken {
            taker_id: PlayerId::new("b"),
            bluffer_id: PlayerId::new("a"),
            challenger_id: PlayerId::new("b"),
            bluff_was_truthful: true,
        };
        assert_eq!(
            taken.to_string(),
            "b challenged a, the play was truthful; b takes the pile"
        );
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::PlayerEmptiedHand {
            player_id: PlayerId::new("a"),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"PLAYER_EMPTIED_HAND":{"player_id":"a"}}"#);

        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
