//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no runtime dependencies, so they are usable
//! from the rules engine, the terminal host and the event log alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0) for every piece kind
//!
//! Rows with a negative index lie above the visible field. They are open space:
//! pieces may spawn or rotate partially into them.
//!
//! # Host Timing Defaults
//!
//! The rules engine has no clock. These values only seed the host loop:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `DEFAULT_FALL_INTERVAL_MS` | 1000 | Time between gravity ticks |
//! | `DEFAULT_INPUT_INTERVAL_MS` | 150 | Minimum gap between repeated inputs |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::Spawn.rotate_cw(), Rotation::Right);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Board height as a `usize`, for array lengths.
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Board width as a `usize`, for array lengths.
pub const BOARD_COLS: usize = BOARD_WIDTH as usize;

/// Number of upcoming pieces shown in the look-ahead queue
pub const NEXT_QUEUE_LEN: usize = 5;

/// Number of piece kinds in one bag
pub const BAG_SIZE: usize = 7;

/// Spawn anchor column
pub const SPAWN_X: i8 = 3;

/// Spawn anchor row
pub const SPAWN_Y: i8 = 0;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default interval between gravity ticks delivered by the host
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 1000;

/// Default minimum interval between two accepted inputs of the same action
pub const DEFAULT_INPUT_INTERVAL_MS: u32 = 150;

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and display color:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order.
    pub const ALL: [PieceKind; BAG_SIZE] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Uppercase letter used by text views.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display color of this kind.
    ///
    /// ```
    /// use blockfall_types::{PieceKind, Rgb};
    ///
    /// assert_eq!(PieceKind::I.color(), Rgb::new(0, 255, 255));
    /// ```
    pub fn color(&self) -> Rgb {
        PIECE_COLORS[self.index()]
    }
}

/// A 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Piece colors indexed by [`PieceKind::index`].
pub const PIECE_COLORS: [Rgb; BAG_SIZE] = [
    Rgb::new(0, 255, 255), // I
    Rgb::new(255, 255, 0), // O
    Rgb::new(255, 0, 255), // T
    Rgb::new(0, 255, 0),   // S
    Rgb::new(255, 0, 0),   // Z
    Rgb::new(0, 0, 255),   // J
    Rgb::new(255, 165, 0), // L
];

/// Rotation states of the Super Rotation System (SRS)
///
/// - **Spawn**: Spawn orientation (0°)
/// - **Right**: Rotated 90° clockwise
/// - **Reverse**: Rotated 180°
/// - **Left**: Rotated 270° clockwise
///
/// The cycle goes: Spawn → Right → Reverse → Left → Spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    Spawn,
    Right,
    Reverse,
    Left,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Spawn.rotate_cw(), Rotation::Right);
    /// assert_eq!(Rotation::Left.rotate_cw(), Rotation::Spawn);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (270° clockwise)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Spawn.rotate_ccw(), Rotation::Left);
    /// assert_eq!(Rotation::Right.rotate_ccw(), Rotation::Spawn);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Number of clockwise quarter turns from `Spawn`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rotation after `index` clockwise quarter turns (wraps mod 4).
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::Spawn,
            1 => Rotation::Right,
            2 => Rotation::Reverse,
            _ => Rotation::Left,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Spawn => "spawn",
            Rotation::Right => "right",
            Rotation::Reverse => "reverse",
            Rotation::Left => "left",
        }
    }
}

/// Commands a host can deliver to the rules engine
///
/// Gravity is not an action: hosts call `Session::tick` on their own clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down without locking
    SoftDrop,
    /// Drop piece to the lowest legal position and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap the active piece with the hold slot (once per piece)
    Hold,
    /// Toggle pause state
    Pause,
    /// Restart the session with the same seed
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("ROTATECW"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Filled cell; the kind is the cell's color identity
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_both_directions() {
        let mut r = Rotation::Spawn;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::Spawn);

        for _ in 0..4 {
            r = r.rotate_ccw();
        }
        assert_eq!(r, Rotation::Spawn);

        assert_eq!(Rotation::from_index(6), Rotation::Reverse);
    }

    #[test]
    fn piece_kind_index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn action_names_round_trip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Hold,
            GameAction::Pause,
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }
}
