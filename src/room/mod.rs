//! Room coordination around the engine.
//!
//! The reducer is pure and knows nothing about who sent a move. A `Room`
//! supplies the rest:
//! - Membership (join, leave) and who starts
//! - Turn authority: only the current seat may play or pass, anyone seated
//!   may call bluff
//! - One lock per room, so moves on the same game are applied one at a time
//! - Rematch voting outside of `GameState`
//!
//! `RoomRegistry` maps names to independent rooms.

pub mod error;
pub mod registry;
pub mod game_room;

pub use error::RoomError;
pub use registry::RoomRegistry;
pub use game_room::{MoveOutcome, RematchStatus, Room};
