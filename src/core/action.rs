//! Moves a player can submit.
//!
//! A move is a transient input to the reducer. The only place one is kept
//! is `GameState::last_move`, which the next bluff call inspects.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::card::{Card, Rank};

/// Cards played in one move.
/// SmallVec keeps the common 1-4 card play off the heap.
pub type PlayedCards = SmallVec<[Card; 4]>;

/// A player move.
///
/// ```
/// use bluff_engine::core::{Card, Move, MoveKind, Rank, Suit};
///
/// let play = Move::play(&[Card::new(Suit::Clubs, Rank::Ace)], Rank::Ace);
/// assert_eq!(play.kind(), MoveKind::Play);
/// assert_eq!(Move::Pass.kind(), MoveKind::Pass);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Move {
    /// Put cards face down on the pile, claiming they are all `declared_rank`.
    Play {
        cards: PlayedCards,
        declared_rank: Rank,
    },
    /// Decline to play this turn.
    Pass,
    /// Challenge the previous play.
    CallBluff,
}

impl Move {
    /// Create a play move.
    #[must_use]
    pub fn play(cards: &[Card], declared_rank: Rank) -> Self {
        Move::Play {
            cards: SmallVec::from_slice(cards),
            declared_rank,
        }
    }

    /// The kind of this move.
    #[must_use]
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Play { .. } => MoveKind::Play,
            Move::Pass => MoveKind::Pass,
            Move::CallBluff => MoveKind::CallBluff,
        }
    }

    /// Whether this is a play.
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Move::Play { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play { cards, declared_rank } => {
                write!(f, "play {} card(s) as {}", cards.len(), declared_rank)
            }
            Move::Pass => f.write_str("pass"),
            Move::CallBluff => f.write_str("call bluff"),
        }
    }
}

/// Payload-free discriminant of [`Move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveKind {
    Play,
    Pass,
    CallBluff,
}
