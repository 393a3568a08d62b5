//! Per-player view of a game.
//!
//! The full `GameState` holds every hand. What goes out to a participant is
//! a `PublicView`: their own hand, hand sizes for everyone, and the pile and
//! last play reduced to counts.

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::card::{Card, Rank};
use super::config::Rules;
use super::player::PlayerId;
use super::state::GameState;

/// Publicly visible facts about one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub hand_size: usize,
}

/// The last move with the played cards hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LastMoveView {
    Play { card_count: usize, declared_rank: Rank },
    Pass,
    CallBluff,
}

impl From<&Move> for LastMoveView {
    fn from(mv: &Move) -> Self {
        match mv {
            Move::Play { cards, declared_rank } => LastMoveView::Play {
                card_count: cards.len(),
                declared_rank: *declared_rank,
            },
            Move::Pass => LastMoveView::Pass,
            Move::CallBluff => LastMoveView::CallBluff,
        }
    }
}

/// What one participant is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicView {
    /// Who this view was built for.
    pub viewer: PlayerId,

    /// The viewer's own cards.
    pub hand: Vec<Card>,

    /// Every seat in turn order.
    pub seats: Vec<SeatView>,

    pub pile_size: usize,
    pub current_player_index: usize,
    pub last_move: Option<LastMoveView>,
    pub rules: Rules,
    pub winner_id: Option<PlayerId>,
    pub current_declared_rank: Rank,
    pub expected_rank: Option<Rank>,
}

impl PublicView {
    /// Build the view for `viewer`. `None` if they are not seated.
    #[must_use]
    pub fn for_player(state: &GameState, viewer: &PlayerId) -> Option<Self> {
        let me = state.player(viewer)?;

        Some(Self {
            viewer: viewer.clone(),
            hand: me.hand.iter().copied().collect(),
            seats: state
                .players
                .iter()
                .map(|p| SeatView {
                    id: p.id.clone(),
                    hand_size: p.hand_size(),
                })
                .collect(),
            pile_size: state.pile.len(),
            current_player_index: state.current_player_index,
            last_move: state.last_move.as_ref().map(LastMoveView::from),
            rules: state.rules,
            winner_id: state.winner_id.clone(),
            current_declared_rank: state.current_declared_rank,
            expected_rank: state.expected_rank,
        })
    }

    /// Whether it is the viewer's turn.
    #[must_use]
    pub fn is_my_turn(&self) -> bool {
        self.seats
            .get(self.current_player_index)
            .is_some_and(|seat| seat.id == self.viewer)
    }
}
