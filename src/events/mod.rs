//! Domain events emitted by the reducer.
//!
//! The reducer returns events next to the new state. They describe what
//! happened (a hand emptied, a pile changed hands) for the transport layer
//! to broadcast, and carry no state of their own.

pub mod event;

pub use event::GameEvent;
