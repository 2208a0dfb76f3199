//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Timing policy
//! (repeat gating, gravity) belongs to the host loop.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
