use crate::piece::Piece;
use crate::types::{PieceKind, Rotation, BOARD_COLS, BOARD_ROWS, NEXT_QUEUE_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
            cells: value.absolute_cells(),
        }
    }
}

/// Everything a host needs to draw or log one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    /// 0 = empty, 1..=7 = piece kind index + 1
    pub board: [[u8; BOARD_COLS]; BOARD_ROWS],
    pub active: ActiveSnapshot,
    pub ghost_y: i8,
    pub hold: Option<PieceKind>,
    pub hold_used: bool,
    pub next_queue: [PieceKind; NEXT_QUEUE_LEN],
    pub last_lines_cleared: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub paused: bool,
    pub game_over: bool,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_COLS]; BOARD_ROWS],
            active: ActiveSnapshot::from(Piece::new(PieceKind::I)),
            ghost_y: 0,
            hold: None,
            hold_used: false,
            next_queue: [PieceKind::I; NEXT_QUEUE_LEN],
            last_lines_cleared: 0,
            lines: 0,
            pieces_locked: 0,
            paused: false,
            game_over: false,
            seed: 0,
        }
    }
}
