//! Text view: maps a `core::GameSnapshot` into rows of colored glyphs.
//!
//! This module is pure (no I/O). Each board cell is two glyphs wide to
//! compensate for typical terminal glyph aspect ratio.

use crate::core::GameSnapshot;
use crate::types::{PieceKind, Rgb, BOARD_COLS, BOARD_ROWS};

const GHOST_FG: Rgb = Rgb::new(90, 90, 90);

/// One terminal character with an optional foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Option<Rgb>,
}

impl Glyph {
    pub const fn plain(ch: char) -> Self {
        Self { ch, fg: None }
    }

    pub const fn colored(ch: char, fg: Rgb) -> Self {
        Self { ch, fg: Some(fg) }
    }
}

/// A screen of text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    lines: Vec<Vec<Glyph>>,
}

impl TextFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Vec<Glyph>] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn push_line(&mut self, line: Vec<Glyph>) {
        self.lines.push(line);
    }

    /// The frame without colors, lines joined by `\n`.
    pub fn to_plain_string(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|g| g.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn push_str(line: &mut Vec<Glyph>, s: &str, fg: Option<Rgb>) {
    line.extend(s.chars().map(|ch| Glyph { ch, fg }));
}

fn kind_from_grid(value: u8) -> Option<PieceKind> {
    PieceKind::ALL.get((value as usize).checked_sub(1)?).copied()
}

/// Text shown to the right of board row `y`.
fn side_panel(snap: &GameSnapshot, y: usize) -> Option<(String, Option<Rgb>)> {
    match y {
        0 => Some(("Next".to_string(), None)),
        1..=5 => {
            let kind = snap.next_queue[y - 1];
            Some((kind.as_char().to_string(), Some(kind.color())))
        }
        7 => Some(("Hold".to_string(), None)),
        8 => Some(match snap.hold {
            Some(kind) if snap.hold_used => (format!("{} (used)", kind.as_char()), Some(GHOST_FG)),
            Some(kind) => (kind.as_char().to_string(), Some(kind.color())),
            None => ("-".to_string(), None),
        }),
        10 => Some((format!("Lines  {}", snap.lines), None)),
        11 => Some((format!("Pieces {}", snap.pieces_locked), None)),
        13 if snap.game_over => Some(("GAME OVER".to_string(), Some(Rgb::new(255, 0, 0)))),
        13 if snap.paused => Some(("PAUSED".to_string(), None)),
        _ => None,
    }
}

/// Render a snapshot: the board with the active piece and its ghost, plus a
/// side panel with the look-ahead queue, hold slot and counters.
pub fn render_snapshot(snap: &GameSnapshot) -> TextFrame {
    let mut grid: [[Glyph; BOARD_COLS]; BOARD_ROWS] = [[Glyph::plain(' '); BOARD_COLS]; BOARD_ROWS];

    for (y, row) in snap.board.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if let Some(kind) = kind_from_grid(value) {
                grid[y][x] = Glyph::colored('#', kind.color());
            }
        }
    }

    let ghost_dy = snap.ghost_y - snap.active.y;
    let mut put = |x: i8, y: i8, glyph: Glyph, only_empty: bool| {
        if x < 0 || y < 0 || x as usize >= BOARD_COLS || y as usize >= BOARD_ROWS {
            return;
        }
        let slot = &mut grid[y as usize][x as usize];
        if !only_empty || slot.ch == ' ' {
            *slot = glyph;
        }
    };
    if !snap.game_over {
        for &(x, y) in &snap.active.cells {
            put(x, y + ghost_dy, Glyph::colored('.', GHOST_FG), true);
        }
    }
    for &(x, y) in &snap.active.cells {
        put(x, y, Glyph::colored('@', snap.active.kind.color()), false);
    }

    let mut frame = TextFrame::new();
    for (y, row) in grid.iter().enumerate() {
        let mut line = Vec::with_capacity(BOARD_COLS * 2 + 16);
        line.push(Glyph::plain('|'));
        for glyph in row {
            line.push(*glyph);
            line.push(*glyph);
        }
        line.push(Glyph::plain('|'));
        if let Some((text, fg)) = side_panel(snap, y) {
            push_str(&mut line, "  ", None);
            push_str(&mut line, &text, fg);
        }
        frame.push_line(line);
    }

    let mut floor = vec![Glyph::plain('+')];
    floor.extend(std::iter::repeat(Glyph::plain('-')).take(BOARD_COLS * 2));
    floor.push(Glyph::plain('+'));
    frame.push_line(floor);

    frame
}
