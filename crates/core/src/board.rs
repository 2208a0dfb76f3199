//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or filled with the
//! kind (and therefore color) of the piece that locked there.
//! Uses a flat array for cache locality and zero allocation.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..19
//! (top to bottom). Rows above the field (y < 0) are open space; the side walls
//! and the floor are solid.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_COLS, BOARD_HEIGHT, BOARD_ROWS, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_COLS * BOARD_ROWS;

/// Row indices removed by one clear, in scan order (bottom row first).
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether a mino may not occupy (x, y).
    ///
    /// Columns outside the field and rows at or below the floor are blocked.
    /// Rows above the field are open. Inside the field this is the fill flag.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Fill the cell at (x, y) with `kind`.
    ///
    /// Out-of-bounds writes are ignored. Returns whether a cell was written.
    pub fn place_block(&mut self, x: i8, y: i8, kind: PieceKind) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = Some(kind);
                true
            }
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        let start = y * BOARD_COLS;
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row and return how many were removed.
    pub fn clear_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Clear all full rows and return the row indices that were cleared.
    ///
    /// Rows above a cleared row shift down; the vacated rows at the top become
    /// empty. Uses a read/write two-pointer pass so no row is skipped when several
    /// rows clear at once.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = BOARD_ROWS;

        // Scan from bottom to top
        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * BOARD_COLS;
                    let dst_start = write_y * BOARD_COLS;
                    self.cells
                        .copy_within(src_start..src_start + BOARD_COLS, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * BOARD_COLS] {
            *cell = None;
        }

        cleared_rows
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Write the board as a numeric grid: 0 = empty, 1..=7 = piece kind.
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_COLS]; BOARD_ROWS]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_COLS;
            for (x, value) in row.iter_mut().enumerate() {
                *value = match self.cells[start + x] {
                    Some(kind) => kind.index() as u8 + 1,
                    None => 0,
                };
            }
        }
    }

    /// Diagnostic text view, top row first.
    ///
    /// Each row is drawn as `|X__X...|`. Rows that are completely filled are left
    /// out. Not a stable format.
    pub fn render_text(&self) -> String {
        let mut out = String::with_capacity((BOARD_COLS + 3) * BOARD_ROWS);
        for y in 0..BOARD_ROWS {
            if self.is_row_full(y) {
                continue;
            }
            out.push('|');
            let start = y * BOARD_COLS;
            for cell in &self.cells[start..start + BOARD_COLS] {
                out.push(if cell.is_some() { 'X' } else { '_' });
            }
            out.push_str("|\n");
        }
        out
    }

    /// Create from a 2D vector for testing
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_ROWS);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_COLS));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_COLS + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(BOARD_COLS)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.place_block(x, y, kind);
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.place_block(0, 0, PieceKind::I);
        board.place_block(5, 10, PieceKind::T);

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 10]; 20];
        cells_2d[5][3] = Some(PieceKind::O);
        cells_2d[10][7] = Some(PieceKind::L);

        let board = Board::from_cells(cells_2d.clone());
        assert_eq!(cells_2d, board.to_cells());
    }

    #[test]
    fn test_cleared_rows_reported_bottom_first() {
        let mut board = Board::new();
        fill_row(&mut board, 12, PieceKind::J);
        fill_row(&mut board, 17, PieceKind::L);

        let rows = board.clear_full_rows();
        assert_eq!(rows.as_slice(), &[17, 12]);
    }

    #[test]
    fn test_clear_more_than_four_rows() {
        let mut board = Board::new();
        for y in 14..20 {
            fill_row(&mut board, y, PieceKind::I);
        }
        assert_eq!(board.clear_lines(), 6);
        assert!(board.is_empty());
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.place_block(0, 19, PieceKind::I);
        board.place_block(9, 0, PieceKind::L);

        let mut grid = [[0u8; BOARD_COLS]; BOARD_ROWS];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[19][0], 1);
        assert_eq!(grid[0][9], 7);
        assert_eq!(grid[10][5], 0);
    }
}
