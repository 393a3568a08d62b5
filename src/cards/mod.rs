//! Deck construction and dealing.
//!
//! ## Key Functions
//!
//! - `create_deck`: the 52 cards in a fixed order
//! - `shuffle_deck`: a shuffled copy, drawing from a caller-supplied `GameRng`
//! - `deal_cards`: the opening `GameState` for a list of seats
//! - `seat_order`: rotate the starting player to the front

pub mod deal;
pub mod deck;

pub use deal::{deal_cards, seat_order};
pub use deck::{create_deck, shuffle_deck, DECK_SIZE};
