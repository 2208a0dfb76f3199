//! Core rules engine - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game and nothing else.
//! It has no clock, no input handling and no rendering: a host loop delivers
//! gravity ticks and player commands one at a time and reads the resulting
//! state back through queries.
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Total**: illegal moves are refused, out-of-range board access is
//!   treated as a wall (or ignored for writes); nothing in here panics or errors
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 occupancy grid with line clearing and a text view
//! - [`pieces`]: shape table and SRS wall-kick tables
//! - [`piece`]: the active piece with movement, rotation and placement
//! - [`bag`]: 7-bag randomizer
//! - [`session`]: the orchestrator owning board, active piece, look-ahead queue and hold
//! - [`snapshot`]: plain-data copy of the session for hosts and logs
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_types::GameAction;
//!
//! let mut session = Session::new(12345);
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::RotateCw);
//! session.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(session.pieces_locked(), 1);
//! assert_eq!(session.next_queue().len(), 5);
//! ```

pub mod bag;
pub mod board;
pub mod piece;
pub mod pieces;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use bag::Bag;
pub use board::Board;
pub use piece::Piece;
pub use pieces::{kick_offsets, shape, try_rotate, PieceShape};
pub use session::{HoldSlot, LockEvent, Session, TickOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
