//! Plain-text dump of a session, for `--dump` and debugging.

use std::fmt::Write;

use crate::core::Session;

/// Current piece, look-ahead queue, hold flags, then the board text.
pub fn dump_text(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Current piece: {}", session.active().kind().as_str());

    let queue: Vec<&str> = session.next_queue().iter().map(|k| k.as_str()).collect();
    let _ = writeln!(out, "Next queue: {}", queue.join(" "));

    let _ = writeln!(out, "Hold exists: {}", !session.hold_slot().is_empty());
    let _ = writeln!(out, "Hold used: {}", session.hold_used());
    out.push_str(&session.board().render_text());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_lists_state_then_board() {
        let session = Session::new(5);
        let text = dump_text(&session);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            format!("Current piece: {}", session.active().kind().as_str())
        );
        assert!(lines[1].starts_with("Next queue: "));
        assert_eq!(lines[1].split_whitespace().count(), 2 + 5);
        assert_eq!(lines[2], "Hold exists: false");
        assert_eq!(lines[3], "Hold used: false");
        assert_eq!(lines.len(), 4 + 20);
        assert_eq!(lines[4], "|__________|");
    }

    #[test]
    fn dump_reflects_hold() {
        let mut session = Session::new(5);
        session.hold();
        let text = dump_text(&session);
        assert!(text.contains("Hold exists: true"));
        assert!(text.contains("Hold used: true"));
    }
}
