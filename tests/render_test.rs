//! Text view and terminal encoding against a live session

use blockfall::core::{Piece, Session};
use blockfall::term::{encode_full_into, render_snapshot};
use blockfall::types::{PieceKind, Rotation, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_board_rows_have_fixed_width() {
    let session = Session::new(8);
    let frame = render_snapshot(&session.snapshot());

    for line in &frame.lines()[..BOARD_ROWS] {
        assert_eq!(line[0].ch, '|');
        assert_eq!(line[BOARD_COLS * 2 + 1].ch, '|');
    }
}

#[test]
fn test_paused_and_game_over_banners() {
    let mut session = Session::new(8);
    session.toggle_pause();
    let text = render_snapshot(&session.snapshot()).to_plain_string();
    assert!(text.contains("PAUSED"));

    let mut session = Session::new(8);
    for y in 2..20 {
        for x in 0..9 {
            session.board_mut().place_block(x, y, PieceKind::T);
        }
    }
    session.hard_drop();
    let text = render_snapshot(&session.snapshot()).to_plain_string();
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn test_line_counter_after_clear() {
    let mut session = Session::new(8);
    for y in 16..20 {
        for x in 1..10 {
            session.board_mut().place_block(x, y, PieceKind::O);
        }
    }
    session.set_active(Piece::at(PieceKind::I, Rotation::Left, -1, 0));
    session.hard_drop();

    let text = render_snapshot(&session.snapshot()).to_plain_string();
    assert!(text.contains("Lines  4"));
}

#[test]
fn test_encoded_frame_contains_every_row() {
    let session = Session::new(8);
    let frame = render_snapshot(&session.snapshot());

    let mut out = Vec::new();
    encode_full_into(&frame, &mut out).unwrap();
    let text = String::from_utf8_lossy(&out);

    assert!(text.contains("Next"));
    assert!(text.contains("+--------------------+"));
    assert_eq!(text.matches('|').count(), BOARD_ROWS * 2);
}
