//! Key mapping from terminal events to game actions.
//!
//! Letter keys are matched case-insensitively. Both arrow/vim and WASD layouts
//! are bound, plus the Z/X rotation pair familiar from guideline games.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a letter key to an action.
fn letter_action(c: char) -> Option<GameAction> {
    match c.to_ascii_lowercase() {
        'h' | 'a' => Some(GameAction::MoveLeft),
        'l' | 'd' => Some(GameAction::MoveRight),
        'j' | 's' => Some(GameAction::SoftDrop),
        'k' | 'w' | 'x' => Some(GameAction::RotateCw),
        'z' | 'y' => Some(GameAction::RotateCcw),
        'c' => Some(GameAction::Hold),
        'p' => Some(GameAction::Pause),
        'r' => Some(GameAction::Restart),
        ' ' => Some(GameAction::HardDrop),
        _ => None,
    }
}

/// Map keyboard input to game actions.
///
/// Keys held with Control are never game input.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::RotateCw),
        KeyCode::Enter => Some(GameAction::HardDrop),
        KeyCode::Tab => Some(GameAction::Hold),
        KeyCode::Esc => Some(GameAction::Pause),
        KeyCode::Char(c) => letter_action(c),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
