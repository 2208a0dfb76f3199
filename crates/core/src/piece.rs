//! The active falling piece.

use crate::board::Board;
use crate::pieces::{shape, try_rotate, PieceShape};
use crate::types::{PieceKind, Rgb, Rotation, SPAWN_X, SPAWN_Y};

/// A piece of a fixed kind with a rotation state and a board anchor.
///
/// Absolute cells are `anchor + offset` for each of the four cached offsets.
/// Legality is the caller's business for [`Piece::move_by`]; [`Piece::rotate`]
/// checks the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    x: i8,
    y: i8,
    cells: PieceShape,
}

impl Piece {
    /// Create a new piece at the spawn anchor in spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, Rotation::Spawn, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece with an explicit rotation and anchor
    pub fn at(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
            cells: shape(kind, rotation),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Mino offsets for the current rotation
    pub fn cells(&self) -> PieceShape {
        self.cells
    }

    /// Board coordinates of the four minos
    pub fn absolute_cells(&self) -> [(i8, i8); 4] {
        self.cells.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether translating by (dx, dy) keeps every mino unblocked
    pub fn can_move(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.absolute_cells()
            .iter()
            .all(|&(x, y)| !board.is_occupied(x + dx, y + dy))
    }

    /// Translate the anchor without any legality check
    pub fn move_by(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotate using the SRS kick search.
    ///
    /// On success rotation, anchor and cached cells change together and `true` is
    /// returned. On failure nothing changes.
    pub fn rotate(&mut self, board: &Board, clockwise: bool) -> bool {
        let Some(rotated) = try_rotate(
            self.kind,
            self.rotation,
            self.x,
            self.y,
            clockwise,
            |x, y| board.is_occupied(x, y),
        ) else {
            return false;
        };

        self.rotation = rotated.rotation;
        self.cells = rotated.shape;
        self.x += rotated.kick.0;
        self.y += rotated.kick.1;
        true
    }

    /// Write the four minos into the board with this piece's kind.
    ///
    /// Minos outside the field are dropped by the board.
    pub fn place(&self, board: &mut Board) {
        for (x, y) in self.absolute_cells() {
            board.place_block(x, y, self.kind);
        }
    }

    /// Check if the piece is resting on the stack or the floor
    pub fn is_grounded(&self, board: &Board) -> bool {
        !self.can_move(board, 0, 1)
    }

    /// How many rows the piece can fall before it is grounded
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut distance = 0;
        while self.can_move(board, 0, distance + 1) {
            distance += 1;
        }
        distance
    }

    /// Whether any mino sits above the visible field
    pub fn is_above_field(&self) -> bool {
        self.absolute_cells().iter().any(|&(_, y)| y < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_new() {
        let piece = Piece::new(PieceKind::T);

        assert_eq!(piece.kind(), PieceKind::T);
        assert_eq!(piece.rotation(), Rotation::Spawn);
        assert_eq!(piece.x(), 3);
        assert_eq!(piece.y(), 0);
        assert_eq!(piece.absolute_cells(), [(4, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn test_move_by_is_unchecked() {
        let mut piece = Piece::new(PieceKind::O);
        piece.move_by(-10, 0);
        assert_eq!(piece.x(), -7);
        assert!(!piece.can_move(&Board::new(), 0, 0));
    }

    #[test]
    fn test_drop_distance_on_empty_board() {
        let piece = Piece::new(PieceKind::T);
        // Lowest mino at row 1, floor is row 19.
        assert_eq!(piece.drop_distance(&Board::new()), 18);
    }

    #[test]
    fn test_place_drops_cells_above_field() {
        let mut board = Board::new();
        let piece = Piece::at(PieceKind::I, Rotation::Right, 0, -2);
        assert!(piece.is_above_field());

        piece.place(&mut board);
        assert_eq!(board.filled_count(), 2);
        assert_eq!(board.get(2, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(2, 1), Some(Some(PieceKind::I)));
    }

    #[test]
    fn test_failed_rotation_leaves_piece_untouched() {
        let mut board = Board::new();
        for y in 0..20 {
            for x in 0..10 {
                board.place_block(x, y, PieceKind::Z);
            }
        }
        // A piece sitting inside a solid field cannot find any free kick.
        let mut piece = Piece::at(PieceKind::T, Rotation::Spawn, 3, 5);
        let before = piece;
        assert!(!piece.rotate(&board, true));
        assert_eq!(piece, before);
    }
}
