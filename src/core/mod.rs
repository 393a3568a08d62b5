//! Core types: cards, players, moves, state, RNG, configuration.
//!
//! Everything here is plain data. The rules that move a `GameState` from
//! one snapshot to the next live in `rules`.

pub mod card;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod view;

pub use card::{Card, Rank, Suit};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use config::{RoomConfig, Rules};
pub use action::{Move, MoveKind, PlayedCards};
pub use state::{GameState, SnapshotError};
pub use view::{LastMoveView, PublicView, SeatView};
