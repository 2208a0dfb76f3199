//! JSON-lines event log for a play session.
//!
//! One object per line, tagged by `"type"`. The log is best effort: the first
//! failed write turns it off and play continues.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};

use serde::Serialize;

use crate::core::{LockEvent, Session};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    Start {
        seed: u64,
    },
    Lock {
        seed: u64,
        piece: &'static str,
        lines_cleared: u32,
        lines: u32,
        pieces_locked: u32,
    },
    GameOver {
        seed: u64,
        lines: u32,
        pieces_locked: u32,
    },
    End {
        seed: u64,
        lines: u32,
        pieces_locked: u32,
    },
}

impl EventRecord {
    pub fn start(session: &Session) -> Self {
        Self::Start {
            seed: session.seed(),
        }
    }

    /// Lock record; counters are read after the lock was applied.
    pub fn lock(session: &Session, event: &LockEvent) -> Self {
        Self::Lock {
            seed: session.seed(),
            piece: event.kind.as_str(),
            lines_cleared: event.lines_cleared,
            lines: session.lines(),
            pieces_locked: session.pieces_locked(),
        }
    }

    pub fn game_over(session: &Session) -> Self {
        Self::GameOver {
            seed: session.seed(),
            lines: session.lines(),
            pieces_locked: session.pieces_locked(),
        }
    }

    pub fn end(session: &Session) -> Self {
        Self::End {
            seed: session.seed(),
            lines: session.lines(),
            pieces_locked: session.pieces_locked(),
        }
    }
}

pub struct EventLog {
    file: Option<File>,
    buf: Vec<u8>,
}

impl EventLog {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            file: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Some(file),
            buf: Vec::with_capacity(256),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn record(&mut self, record: &EventRecord) {
        let Some(file) = self.file.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if file.write_all(&self.buf).is_err() {
            self.file = None;
        }
    }
}
