//! Game rules: the move reducer.
//!
//! - `apply_move`: legal moves produce a new state and events, illegal
//!   moves produce the input state unchanged
//! - `try_apply_move`: the same, but illegal moves report a `Rejection`
//! - `legal_move_kinds`: what the current seat may submit
//!
//! The reducer enforces game rules only. Whether the sender of a move is
//! allowed to act (turn authority, identity) is decided by the caller; see
//! `room`.

pub mod engine;

pub use engine::{apply_move, legal_move_kinds, try_apply_move, Rejection, Transition};
