//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so hosts and tests can use
//! `blockfall::{core, input, term, types}`. The host-side configuration and event
//! log used by the `blockfall` binary live here too.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod dump;
pub mod event_log;
