//! Blockfall terminal host (default binary).
//!
//! Owns the clock: it polls crossterm for keys, gates repeats, delivers a
//! gravity tick every fall interval and redraws the text view.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::{HostConfig, HostMode};
use blockfall::core::{GameSnapshot, Session};
use blockfall::dump::dump_text;
use blockfall::event_log::{EventLog, EventRecord};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{render_snapshot, TerminalRenderer};
use blockfall::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = HostConfig::from_env().apply_args(&args)?;

    let session = match config.seed {
        Some(seed) => Session::new(seed),
        None => Session::from_random_seed(),
    };

    match config.mode {
        HostMode::Dump => {
            print!("{}", dump_text(&session));
            Ok(())
        }
        HostMode::Play => play(session, &config),
    }
}

fn play(mut session: Session, config: &HostConfig) -> Result<()> {
    let mut log = match config.log_path.as_deref() {
        Some(path) => {
            EventLog::open(path).with_context(|| format!("opening event log {}", path))?
        }
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    log.record(&EventRecord::start(&session));
    let result = run(&mut term, &mut session, &mut log, config);
    log.record(&EventRecord::end(&session));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Drops a repeated action that arrives sooner than the input interval.
struct InputGate {
    interval: Duration,
    last: Option<(GameAction, Instant)>,
}

impl InputGate {
    fn new(interval_ms: u32) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms as u64),
            last: None,
        }
    }

    fn accept(&mut self, action: GameAction, now: Instant) -> bool {
        if let Some((prev, at)) = self.last {
            if prev == action && now.duration_since(at) < self.interval {
                return false;
            }
        }
        self.last = Some((action, now));
        true
    }
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    log: &mut EventLog,
    config: &HostConfig,
) -> Result<()> {
    let fall_interval = Duration::from_millis(config.fall_interval_ms as u64);
    let frame_interval = Duration::from_millis(TICK_MS as u64);
    let mut gate = InputGate::new(config.input_interval_ms);
    let mut snap = GameSnapshot::default();
    let mut last_fall = Instant::now();
    let mut was_over = session.game_over();

    loop {
        session.snapshot_into(&mut snap);
        term.draw(&render_snapshot(&snap))?;

        let until_fall = fall_interval.saturating_sub(last_fall.elapsed());
        if event::poll(until_fall.min(frame_interval))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if gate.accept(action, Instant::now()) {
                            session.apply_action(action);
                            if action == GameAction::Restart {
                                last_fall = Instant::now();
                                log.record(&EventRecord::start(session));
                            }
                        }
                    }
                }
            }
        }

        if last_fall.elapsed() >= fall_interval {
            last_fall = Instant::now();
            session.tick();
        }

        // Gravity locks and hard drops both land here.
        if let Some(event) = session.take_last_event() {
            log.record(&EventRecord::lock(session, &event));
        }

        let over = session.game_over();
        if over && !was_over {
            log.record(&EventRecord::game_over(session));
        }
        was_over = over;
    }
}
