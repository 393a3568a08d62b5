//! # bluff-engine
//!
//! Game engine for "Bluff", the shedding game where you lay cards face down,
//! claim a rank, and hope nobody calls you on it.
//!
//! ## Design Principles
//!
//! 1. **Pure reducer**: `apply_move(state, move)` returns a new state and a
//!    list of events. No I/O, no locks, no hidden state.
//!
//! 2. **Snapshots, not mutation**: `GameState` is replaced wholesale on every
//!    transition. Persistent `im` vectors make the copies O(1).
//!
//! 3. **Silent rejection**: an illegal move yields the input state and no
//!    events. `try_apply_move` reports the reason when a caller wants it.
//!
//! 4. **Authority lives outside**: the engine checks game rules; who may act
//!    is the `Room`'s job.
//!
//! ## Modules
//!
//! - `core`: Cards, players, moves, state, RNG, configuration, player views
//! - `cards`: Deck construction, shuffling and dealing
//! - `rules`: The move reducer
//! - `events`: Events emitted by the reducer
//! - `room`: Per-room coordination (membership, turns, rematches)

pub mod core;
pub mod cards;
pub mod rules;
pub mod events;
pub mod room;

// Re-export commonly used types
pub use crate::core::{
    Card, Rank, Suit,
    Player, PlayerId,
    GameRng,
    Rules, RoomConfig,
    Move, MoveKind,
    GameState, SnapshotError,
    PublicView,
};

pub use crate::cards::{create_deck, deal_cards, seat_order, shuffle_deck, DECK_SIZE};

pub use crate::rules::{apply_move, legal_move_kinds, try_apply_move, Rejection, Transition};

pub use crate::events::GameEvent;

pub use crate::room::{MoveOutcome, RematchStatus, Room, RoomError, RoomRegistry};
