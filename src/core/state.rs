//! Game state: the snapshot the reducer consumes and produces.
//!
//! ## GameState
//!
//! Complete state of one game:
//! - Seats in turn order, each with a hand
//! - The face-down pile
//! - Whose turn it is and what was last played
//! - The declaration cycle (`current_declared_rank`, `expected_rank`)
//! - The winner, once there is one
//!
//! A `GameState` is never edited in place by the engine. Every transition
//! builds a new value; `im` persistent vectors keep that O(1) to clone.
//!
//! ## Snapshots
//!
//! `to_bytes` / `from_bytes` give a compact `bincode` encoding for rooms that
//! want to checkpoint a game. Whether and where to store it is up to them.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::Move;
use super::card::{Card, Rank};
use super::config::Rules;
use super::player::{Player, PlayerId};

/// Snapshot encoding failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode game snapshot: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode game snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// Full state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order.
    pub players: Vector<Player>,

    /// Cards played since the last bluff call, oldest first.
    pub pile: Vector<Card>,

    /// Seat whose turn it is. Always a valid index into `players`.
    pub current_player_index: usize,

    /// Most recently applied move.
    pub last_move: Option<Move>,

    /// House rules for this game.
    pub rules: Rules,

    /// Set once the game has ended; nothing changes afterwards.
    pub winner_id: Option<PlayerId>,

    /// Rank claimed by the latest play of the current pile.
    /// `Rank::FIRST` when the pile is fresh.
    pub current_declared_rank: Rank,

    /// Rank the next play must declare. `None` means any rank.
    pub expected_rank: Option<Rank>,
}

impl GameState {
    /// Create the opening state for the given seats.
    ///
    /// ## Defaults
    ///
    /// - `current_player_index`: 0
    /// - `pile`: empty
    /// - `last_move`, `winner_id`, `expected_rank`: none
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = Player>, rules: Rules) -> Self {
        let players: Vector<Player> = players.into_iter().collect();
        assert!(!players.is_empty(), "Must have at least 1 player");

        Self {
            players,
            pile: Vector::new(),
            current_player_index: 0,
            last_move: None,
            rules,
            winner_id: None,
            current_declared_rank: Rank::FIRST,
            expected_rank: None,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Seat immediately before the current one in turn order.
    ///
    /// After a play this is the seat that made it.
    #[must_use]
    pub fn previous_player_index(&self) -> usize {
        let count = self.player_count();
        (self.current_player_index + count - 1) % count
    }

    /// Seat immediately after the current one in turn order.
    #[must_use]
    pub fn next_player_index(&self) -> usize {
        (self.current_player_index + 1) % self.player_count()
    }

    /// Seat index of a player, if seated in this game.
    #[must_use]
    pub fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner_id.is_some()
    }

    /// Every card in the game: all hands in seat order, then the pile.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.players
            .iter()
            .flat_map(|p| p.hand.iter().copied())
            .chain(self.pile.iter().copied())
            .collect()
    }

    /// Encode this state as a binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a binary snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let state: Self = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        if state.players.is_empty() || state.current_player_index >= state.players.len() {
            return Err(SnapshotError::Decode(Box::new(bincode::ErrorKind::Custom(
                "snapshot has no valid current seat".to_string(),
            ))));
        }
        Ok(state)
    }
}
