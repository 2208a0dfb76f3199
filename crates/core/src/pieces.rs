//! Pieces module - Tetromino shapes and SRS rotation system
//!
//! Implements the Super Rotation System (SRS) with wall kick tables.
//! Reference: https://tetris.wiki/SRS
//!
//! Shapes are given as mino offsets inside the piece's bounding box with y growing
//! downward, matching the board.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Five kick candidates tried in order; index 0 is the unkicked rotation.
pub type KickRow = [(i8, i8); 5];

/// Kick rows indexed by `[from_rotation][direction]`, direction 0 = CW, 1 = CCW.
pub type KickTable = [[KickRow; 2]; 4];

/// Shape table indexed by `[kind][rotation]`.
static SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

// Kick tables below are the published SRS values, written with y pointing up.

/// O piece never kicks
static O_KICKS: KickTable = [[[(0, 0); 5]; 2]; 4];

/// JLSTZ kick table (shared by J, L, S, T, Z)
static JLSTZ_KICKS: KickTable = [
    // Spawn
    [
        [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 0->R
        [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 0->L
    ],
    // Right
    [
        [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)], // R->2
        [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)], // R->0
    ],
    // Reverse
    [
        [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // 2->L
        [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // 2->R
    ],
    // Left
    [
        [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)], // L->0
        [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)], // L->2
    ],
];

/// I piece kick table
static I_KICKS: KickTable = [
    // Spawn
    [
        [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)], // 0->R
        [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)], // 0->L
    ],
    // Right
    [
        [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)], // R->2
        [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)], // R->0
    ],
    // Reverse
    [
        [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)], // 2->L
        [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)], // 2->R
    ],
    // Left
    [
        [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)], // L->0
        [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)], // L->2
    ],
];

/// Get kick table for a piece kind
pub fn kick_table(kind: PieceKind) -> &'static KickTable {
    match kind {
        PieceKind::O => &O_KICKS,
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    }
}

/// Kick candidates for rotating `kind` away from `from`, in board space (y down).
pub fn kick_offsets(kind: PieceKind, from: Rotation, clockwise: bool) -> KickRow {
    let direction = if clockwise { 0 } else { 1 };
    kick_table(kind)[from.index()][direction].map(|(dx, dy)| (dx, -dy))
}

/// Successful rotation: the new shape, rotation state, and the kick that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotated {
    pub shape: PieceShape,
    pub rotation: Rotation,
    pub kick: (i8, i8),
}

/// Try to rotate a piece with wall kicks
///
/// `is_blocked` answers whether a single board cell is unavailable. The first
/// kick candidate whose cells are all free wins; `None` if every candidate collides.
pub fn try_rotate(
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    clockwise: bool,
    is_blocked: impl Fn(i8, i8) -> bool,
) -> Option<Rotated> {
    let new_rotation = if clockwise {
        rotation.rotate_cw()
    } else {
        rotation.rotate_ccw()
    };
    let new_shape = shape(kind, new_rotation);

    kick_offsets(kind, rotation, clockwise)
        .into_iter()
        .find(|&(dx, dy)| {
            new_shape
                .iter()
                .all(|&(mx, my)| !is_blocked(x + dx + mx, y + dy + my))
        })
        .map(|kick| Rotated {
            shape: new_shape,
            rotation: new_rotation,
            kick,
        })
}
