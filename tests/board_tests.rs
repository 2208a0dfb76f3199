//! Board tests: occupancy, line clears and the text view

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.place_block(x, y, kind);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.is_empty());

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
            assert!(!board.is_occupied(x, y));
        }
    }
}

#[test]
fn test_walls_and_floor_are_occupied() {
    let board = Board::new();

    assert!(board.is_occupied(-1, 5));
    assert!(board.is_occupied(BOARD_WIDTH as i8, 5));
    assert!(board.is_occupied(4, BOARD_HEIGHT as i8));
    assert!(board.is_occupied(-1, -1));
}

#[test]
fn test_space_above_field_is_open() {
    let board = Board::new();
    assert!(!board.is_occupied(0, -1));
    assert!(!board.is_occupied(9, -4));
    assert_eq!(board.get(0, -1), None);
}

#[test]
fn test_place_block_out_of_bounds_is_ignored() {
    let mut board = Board::new();

    assert!(!board.place_block(-1, 0, PieceKind::T));
    assert!(!board.place_block(0, -1, PieceKind::T));
    assert!(!board.place_block(BOARD_WIDTH as i8, 0, PieceKind::T));
    assert!(!board.place_block(0, BOARD_HEIGHT as i8, PieceKind::T));
    assert!(board.is_empty());

    assert!(board.place_block(5, 10, PieceKind::T));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
}

#[test]
fn test_clear_without_full_rows_changes_nothing() {
    let mut board = Board::new();
    for x in 0..9 {
        board.place_block(x, 19, PieceKind::J);
    }
    board.place_block(4, 3, PieceKind::S);
    let before = board.clone();

    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_full_bottom_row_clears_to_empty() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);

    assert!(board.is_row_full(19));
    assert_eq!(board.clear_lines(), 1);
    assert!(board.is_empty());
}

#[test]
fn test_rows_above_shift_down_by_one() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.place_block(2, 18, PieceKind::T);
    board.place_block(7, 10, PieceKind::Z);

    assert_eq!(board.clear_lines(), 1);

    assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(7, 11), Some(Some(PieceKind::Z)));
    assert_eq!(board.get(2, 18), Some(None));
    assert_eq!(board.get(7, 10), Some(None));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_two_non_adjacent_rows_clear_together() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    fill_row(&mut board, 17, PieceKind::L);
    board.place_block(0, 18, PieceKind::O);
    board.place_block(5, 16, PieceKind::S);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    // Row 18 drops one, row 16 drops two.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(5, 18), Some(Some(PieceKind::S)));
    assert_eq!(board.filled_count(), 2);
    assert!(!board.is_row_full(19));
    assert!(!board.is_row_full(18));
}

#[test]
fn test_four_stacked_rows_clear() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }
    board.place_block(3, 15, PieceKind::T);

    assert_eq!(board.clear_lines(), 4);
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_render_text_elides_full_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.place_block(0, 18, PieceKind::T);
    board.place_block(9, 18, PieceKind::T);

    let text = board.render_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), BOARD_HEIGHT as usize - 1);
    assert_eq!(lines[0], "|__________|");
    assert_eq!(*lines.last().unwrap(), "|X________X|");
    assert_eq!(board.to_string(), text);
}

#[test]
fn test_u8_grid_uses_kind_index() {
    let mut board = Board::new();
    board.place_block(0, 0, PieceKind::I);
    board.place_block(9, 19, PieceKind::L);

    let mut grid = [[0u8; 10]; 20];
    board.write_u8_grid(&mut grid);

    assert_eq!(grid[0][0], PieceKind::I.index() as u8 + 1);
    assert_eq!(grid[19][9], PieceKind::L.index() as u8 + 1);
    assert_eq!(grid.iter().flatten().filter(|&&v| v != 0).count(), 2);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::Z);
    board.clear();
    assert!(board.is_empty());
}
