//! Game loop - lifecycle, interval timers, and command dispatch
//!
//! The loop is the single-threaded actor of the design: the host calls
//! [`GameLoop::advance`] from its tick source and [`GameLoop::apply_command`]
//! from its input source, and both mutate through the same `&mut GameLoop`,
//! so a gravity tick and an input command can never interleave
//! mid-operation.

use crate::config::{ConfigError, SessionConfig};
use crate::core::rng::PieceSource;
use crate::core::session::{DropResult, GameSession};
use crate::types::{GameCommand, Lifecycle};

/// Accumulates elapsed milliseconds and reports whole intervals.
///
/// This is the manual-clock realization of the tick source: the host (or a
/// test) feeds elapsed time, the timer answers how many intervals passed,
/// and the remainder carries over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u32,
    carry_ms: u32,
}

impl IntervalTimer {
    /// `interval_ms` must be positive (enforced by `SessionConfig::validate`).
    pub fn new(interval_ms: u32) -> Self {
        debug_assert!(interval_ms > 0);
        Self {
            interval_ms,
            carry_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Feed elapsed time; returns the number of whole intervals that passed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.interval_ms == 0 {
            return 0;
        }
        self.carry_ms = self.carry_ms.saturating_add(elapsed_ms);
        let ticks = self.carry_ms / self.interval_ms;
        self.carry_ms %= self.interval_ms;
        ticks
    }

    /// Discard any partially accumulated interval.
    pub fn reset(&mut self) {
        self.carry_ms = 0;
    }
}

/// A session plus the two timers that drive it: gravity and the elapsed
/// counter.
pub struct GameLoop {
    session: GameSession,
    gravity: IntervalTimer,
    counter: IntervalTimer,
    started: bool,
}

impl GameLoop {
    pub fn new(config: SessionConfig, source: Box<dyn PieceSource>) -> Result<Self, ConfigError> {
        let session = GameSession::new(config, source)?;
        let gravity = IntervalTimer::new(session.config().gravity_interval_ms);
        let counter = IntervalTimer::new(session.config().counter_interval_ms);
        Ok(Self {
            session,
            gravity,
            counter,
            started: false,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Begin ticking and start the session. Idempotent; refuses to restart
    /// a session that already ended.
    pub fn start(&mut self) {
        if self.started || self.session.game_over() {
            return;
        }
        self.started = true;
        self.session.start();
    }

    /// Halt ticking. Idempotent. Accumulated partial intervals are
    /// discarded, so a drop that was already "due" can no longer fire.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.started = false;
        self.gravity.reset();
        self.counter.reset();
    }

    /// Advance wall-clock time while the loop is running.
    ///
    /// Applies one counter increment per counter interval and exactly one
    /// gravity drop per gravity interval contained in `elapsed_ms`. No time
    /// accumulates while stopped, and the session ending mid-burst halts the
    /// remaining drops of the same call.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if !self.started || self.session.lifecycle() != Lifecycle::Running {
            return;
        }

        for _ in 0..self.counter.advance(elapsed_ms) {
            self.session.bump_counter();
        }

        let drops = self.gravity.advance(elapsed_ms);
        for _ in 0..drops {
            if self.session.lifecycle() != Lifecycle::Running {
                break;
            }
            self.session.drop_piece();
        }

        if self.session.game_over() {
            self.stop();
        }
    }

    /// Apply one decoded input command. Returns whether it changed state.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::StartGame => {
                if self.started || self.session.game_over() {
                    return false;
                }
                self.start();
                true
            }
            GameCommand::StopGame => {
                if !self.started {
                    return false;
                }
                self.stop();
                true
            }
            GameCommand::MoveLeft => self.session.move_piece(-1),
            GameCommand::MoveRight => self.session.move_piece(1),
            GameCommand::RotateCw => self.session.rotate_piece(),
            GameCommand::SoftDrop => {
                // A manual drop restarts the gravity phase.
                self.gravity.reset();
                let result = self.session.drop_piece();
                if self.session.game_over() {
                    self.stop();
                }
                !matches!(result, DropResult::Ignored)
            }
        }
    }
}
