//! Terminal text view for a running session.
//!
//! The rules engine never draws. This crate turns a [`core::GameSnapshot`] into a
//! grid of colored glyphs ([`TextFrame`]) and flushes it to a terminal.
//!
//! - [`text_view`] is pure and unit-tested
//! - [`renderer`] owns raw mode and the alternate screen

pub mod renderer;
pub mod text_view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use renderer::{encode_full_into, TerminalRenderer};
pub use text_view::{render_snapshot, Glyph, TextFrame};
