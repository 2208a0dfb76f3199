//! Property tests for the rules core.
//!
//! - `can_move` agrees with a direct recount of the four target cells.
//! - Every run of seven draws from a fresh bag is a permutation of the kinds.
//! - Clearing removes exactly the full rows and keeps every other row in order.

use proptest::prelude::*;

use blockfall::core::{Bag, Board, Piece};
use blockfall::types::{PieceKind, Rotation, BOARD_COLS, BOARD_ROWS};

fn board_from_mask(mask: &[bool]) -> Board {
    let mut board = Board::new();
    for (i, &filled) in mask.iter().enumerate() {
        if filled {
            let x = (i % BOARD_COLS) as i8;
            let y = (i / BOARD_COLS) as i8;
            board.place_block(x, y, PieceKind::ALL[i % 7]);
        }
    }
    board
}

/// Occupancy recomputed from the raw grid, without `Board::is_occupied`.
fn blocked(board: &Board, x: i8, y: i8) -> bool {
    if x < 0 || x >= BOARD_COLS as i8 || y >= BOARD_ROWS as i8 {
        return true;
    }
    if y < 0 {
        return false;
    }
    board.cells()[y as usize * BOARD_COLS + x as usize].is_some()
}

fn row_is_full(mask: &[bool], y: usize) -> bool {
    mask[y * BOARD_COLS..(y + 1) * BOARD_COLS].iter().all(|&c| c)
}

proptest! {
    #[test]
    fn can_move_matches_recomputed_occupancy(
        kind_idx in 0usize..7,
        rot in 0usize..4,
        x in -3i8..12,
        y in -4i8..22,
        dx in -2i8..=2,
        dy in -2i8..=2,
        mask in proptest::collection::vec(any::<bool>(), BOARD_COLS * BOARD_ROWS),
    ) {
        let board = board_from_mask(&mask);
        let piece = Piece::at(PieceKind::ALL[kind_idx], Rotation::from_index(rot), x, y);

        let expected = piece
            .absolute_cells()
            .iter()
            .all(|&(cx, cy)| !blocked(&board, cx + dx, cy + dy));
        prop_assert_eq!(piece.can_move(&board, dx, dy), expected);
    }

    #[test]
    fn every_bag_is_a_permutation(seed in any::<u64>(), bags in 1usize..8) {
        let mut bag = Bag::new(seed);
        for _ in 0..bags {
            let mut drawn: Vec<PieceKind> = (0..7).map(|_| bag.next_piece()).collect();
            prop_assert_eq!(bag.remaining(), 0);
            drawn.sort();
            prop_assert_eq!(drawn, PieceKind::ALL.to_vec());
        }
    }

    #[test]
    fn clear_keeps_partial_rows_in_order(
        mask in proptest::collection::vec(prop::bool::weighted(0.8), BOARD_COLS * BOARD_ROWS),
    ) {
        let mut board = board_from_mask(&mask);
        let full = (0..BOARD_ROWS).filter(|&y| row_is_full(&mask, y)).count();
        let before: Vec<Vec<bool>> = (0..BOARD_ROWS)
            .filter(|&y| !row_is_full(&mask, y))
            .map(|y| mask[y * BOARD_COLS..(y + 1) * BOARD_COLS].to_vec())
            .collect();

        prop_assert_eq!(board.clear_lines(), full);

        let after: Vec<Vec<bool>> = (0..BOARD_ROWS)
            .map(|y| {
                (0..BOARD_COLS)
                    .map(|x| board.is_occupied(x as i8, y as i8))
                    .collect()
            })
            .collect();
        // The top `full` rows are vacated; the rest are the survivors, in order.
        for row in &after[..full] {
            prop_assert!(row.iter().all(|&c| !c));
        }
        prop_assert_eq!(&after[full..], before.as_slice());

        prop_assert_eq!(board.clear_lines(), 0);
    }
}
