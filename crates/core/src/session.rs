//! Session module - the rules orchestrator
//!
//! A [`Session`] ties together the board, the active piece, the look-ahead queue,
//! the hold slot and the bag. It advances only when the host delivers a gravity
//! tick or a command, one at a time.
//!
//! Piece lifecycle: falling → locked (gravity finds no room below, or hard drop)
//! → line clear → next piece spawned from the queue head → falling.

use crate::bag::Bag;
use crate::board::{Board, ClearedRows};
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind, NEXT_QUEUE_LEN};

/// Contents of the hold slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldSlot {
    Empty,
    /// A held kind plus the piece exactly as it was when it was stashed
    Holding { kind: PieceKind, saved: Piece },
}

impl HoldSlot {
    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            HoldSlot::Empty => None,
            HoldSlot::Holding { kind, .. } => Some(*kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, HoldSlot::Empty)
    }
}

/// Emitted each time a piece locks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub cleared_rows: ClearedRows,
    /// The lock ended the session
    pub topped_out: bool,
}

/// Result of a gravity tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened (paused or game over)
    Idle,
    /// The active piece fell one row
    Moved,
    /// The active piece could not fall and was locked
    Locked(LockEvent),
}

/// Complete rules state for one game
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Piece,
    next_queue: [PieceKind; NEXT_QUEUE_LEN],
    hold: HoldSlot,
    hold_used: bool,
    bag: Bag,
    /// Lines cleared by the most recent lock
    last_lines_cleared: u32,
    lines: u32,
    pieces_locked: u32,
    /// Last lock event (consumed by observers)
    last_event: Option<LockEvent>,
    paused: bool,
    game_over: bool,
}

impl Session {
    /// Create a new session with the given bag seed
    pub fn new(seed: u64) -> Self {
        Self::with_bag(Bag::new(seed))
    }

    /// Create a session with a freshly drawn random seed
    pub fn from_random_seed() -> Self {
        Self::with_bag(Bag::from_random_seed())
    }

    fn with_bag(mut bag: Bag) -> Self {
        let active = Piece::new(bag.next_piece());
        let next_queue = std::array::from_fn(|_| bag.next_piece());

        Self {
            board: Board::new(),
            active,
            next_queue,
            hold: HoldSlot::Empty,
            hold_used: false,
            bag,
            last_lines_cleared: 0,
            lines: 0,
            pieces_locked: 0,
            last_event: None,
            paused: false,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_queue(&self) -> &[PieceKind; NEXT_QUEUE_LEN] {
        &self.next_queue
    }

    pub fn hold_slot(&self) -> &HoldSlot {
        &self.hold
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold.kind()
    }

    /// Whether hold was already used by the current piece
    pub fn hold_used(&self) -> bool {
        self.hold_used
    }

    pub fn can_hold(&self) -> bool {
        !self.hold_used && self.playable()
    }

    pub fn last_lines_cleared(&self) -> u32 {
        self.last_lines_cleared
    }

    /// Total lines cleared this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> u64 {
        self.bag.seed()
    }

    fn playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Row the active anchor would land on after a hard drop
    pub fn ghost_y(&self) -> i8 {
        self.active.y() + self.active.drop_distance(&self.board)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Board access for tests that need a prepared stack
    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece (tests and tooling)
    #[doc(hidden)]
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
    }

    /// Gravity step: fall one row, or lock if there is no room below
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playable() {
            return TickOutcome::Idle;
        }

        if self.active.can_move(&self.board, 0, 1) {
            self.active.move_by(0, 1);
            TickOutcome::Moved
        } else {
            TickOutcome::Locked(self.lock_active())
        }
    }

    /// Try to move the active piece
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() || !self.active.can_move(&self.board, dx, dy) {
            return false;
        }
        self.active.move_by(dx, dy);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row without locking
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.playable() && self.active.rotate(&self.board, true)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.playable() && self.active.rotate(&self.board, false)
    }

    /// Hard drop the active piece to the bottom and lock it
    pub fn hard_drop(&mut self) -> Option<LockEvent> {
        if !self.playable() {
            return None;
        }
        let distance = self.active.drop_distance(&self.board);
        self.active.move_by(0, distance);
        Some(self.lock_active())
    }

    /// Swap the active piece with the hold slot
    ///
    /// Refused (returns false) if hold was already used by this piece.
    pub fn hold(&mut self) -> bool {
        if !self.playable() || self.hold_used {
            return false;
        }

        let stashed = HoldSlot::Holding {
            kind: self.active.kind(),
            saved: self.active,
        };

        match std::mem::replace(&mut self.hold, stashed) {
            HoldSlot::Empty => self.spawn_next(),
            HoldSlot::Holding { kind, .. } => self.spawn(kind),
        }

        self.hold_used = true;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Start over with the same seed
    pub fn restart(&mut self) {
        *self = Self::new(self.seed());
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Lock the active piece onto the board and handle line clears
    fn lock_active(&mut self) -> LockEvent {
        let piece = self.active;
        piece.place(&mut self.board);
        let locked_out = piece.is_above_field();

        let cleared_rows = self.board.clear_full_rows();
        let lines_cleared = cleared_rows.len() as u32;

        self.last_lines_cleared = lines_cleared;
        self.lines += lines_cleared;
        self.pieces_locked += 1;
        self.hold_used = false;

        self.spawn_next();
        if locked_out {
            self.game_over = true;
        }

        let event = LockEvent {
            kind: piece.kind(),
            lines_cleared,
            cleared_rows,
            topped_out: self.game_over,
        };
        self.last_event = Some(event.clone());
        event
    }

    /// Promote the queue head to active and refill the queue tail from the bag
    fn spawn_next(&mut self) {
        let kind = self.next_queue[0];
        self.next_queue.copy_within(1.., 0);
        self.next_queue[NEXT_QUEUE_LEN - 1] = self.bag.next_piece();
        self.spawn(kind);
    }

    /// Put a fresh piece of `kind` at the spawn anchor
    fn spawn(&mut self, kind: PieceKind) {
        self.active = Piece::new(kind);
        if !self.active.can_move(&self.board, 0, 0) {
            self.game_over = true;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = ActiveSnapshot::from(self.active);
        out.ghost_y = self.ghost_y();
        out.hold = self.hold.kind();
        out.hold_used = self.hold_used;
        out.next_queue = self.next_queue;
        out.last_lines_cleared = self.last_lines_cleared;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.seed = self.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
