//! Session module - the piece controller and session state
//!
//! `GameSession` owns the grid and the falling piece; nothing else mutates
//! them. Every operation here runs to completion against in-memory state,
//! and the host serializes gravity ticks and input commands by holding the
//! one `&mut` handle (see `engine::game_loop`).

use crate::config::{ConfigError, SessionConfig};
use crate::core::collision::collides;
use crate::core::grid::Grid;
use crate::core::pieces::{shape_of, Shape};
use crate::core::rng::PieceSource;
use crate::core::rotate::attempt_rotate;
use crate::core::scoring::line_clear_score;
use crate::core::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::{Lifecycle, PieceKind};

/// The falling piece: a shape matrix and its grid-space origin.
///
/// Exists only while falling; at lock time its cells merge into the grid and
/// the struct is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

/// Outcome of a single gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// The piece moved down one row and keeps falling.
    Moved,
    /// The piece could not descend: it locked at its last valid position,
    /// full rows were cleared, and the round advanced.
    Locked { lines_cleared: u32 },
    /// Nothing to drop (session not running).
    Ignored,
}

/// Lock outcome exposed to observers (score/line-clear presentation hooks).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_awarded: u32,
    pub game_over: bool,
}

/// One running game: grid, falling piece, score, and lifecycle.
pub struct GameSession {
    config: SessionConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    source: Box<dyn PieceSource>,
    lifecycle: Lifecycle,
    score: u32,
    lines_cleared: u32,
    /// Elapsed-interval counter, bumped by the game loop's counter timer.
    counter: u32,
    /// Last lock outcome (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Create an idle session from a validated config and a piece source.
    pub fn new(config: SessionConfig, source: Box<dyn PieceSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self {
            config,
            grid,
            active: None,
            source,
            lifecycle: Lifecycle::Idle,
            score: 0,
            lines_cleared: 0,
            counter: 0,
            last_event: None,
        })
    }

    /// Leave idle and spawn the first piece. No-op in any other state.
    pub fn start(&mut self) {
        if self.lifecycle != Lifecycle::Idle {
            return;
        }
        self.lifecycle = Lifecycle::Running;
        self.spawn_next();
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn game_over(&self) -> bool {
        self.lifecycle.is_terminal()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Move the active piece one column left (-1) or right (+1).
    /// A colliding move is rejected and the piece is left unchanged.
    pub fn move_piece(&mut self, direction: i8) -> bool {
        if self.lifecycle != Lifecycle::Running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let new_x = active.x.saturating_add(direction);
        if collides(&self.grid, &active.shape, new_x, active.y) {
            return false;
        }
        active.x = new_x;
        true
    }

    /// One gravity step: descend one row, or lock and advance the round.
    pub fn drop_piece(&mut self) -> DropResult {
        if self.lifecycle != Lifecycle::Running {
            return DropResult::Ignored;
        }
        let Some(active) = self.active.as_mut() else {
            return DropResult::Ignored;
        };

        let new_y = active.y + 1;
        if !collides(&self.grid, &active.shape, active.x, new_y) {
            active.y = new_y;
            return DropResult::Moved;
        }

        // Could not descend: merge at the last valid position and run the
        // round (clear, score, spawn) to completion.
        let lines = self.lock_and_advance();
        DropResult::Locked {
            lines_cleared: lines,
        }
    }

    /// Rotate the active piece clockwise with wall kicks. An abandoned kick
    /// search leaves shape and position untouched.
    pub fn rotate_piece(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Running {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        match attempt_rotate(&self.grid, &active.shape, active.x, active.y) {
            Some((shape, x)) => {
                active.shape = shape;
                active.x = x;
                true
            }
            None => false,
        }
    }

    /// Draw the next kind and spawn it at the top, horizontally centered.
    ///
    /// Returns false, and ends the session, when the spawn position is
    /// already blocked; the blocked piece is never merged.
    pub fn spawn_next(&mut self) -> bool {
        let kind = self.source.next_kind();
        let shape = shape_of(kind);
        let x = ((self.grid.width() as i16 - shape.width() as i16) / 2) as i8;
        let y = 0;

        if collides(&self.grid, &shape, x, y) {
            self.lifecycle = Lifecycle::GameOver;
            self.active = None;
            return false;
        }

        self.active = Some(ActivePiece { kind, shape, x, y });
        true
    }

    /// Merge the active piece, clear full rows, update score/line counters,
    /// and spawn the next piece. Returns the number of lines cleared.
    fn lock_and_advance(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        self.grid.merge(&active.shape, active.x, active.y);

        let cleared = self.grid.sweep_full_rows();
        let lines = cleared.len() as u32;
        let awarded = line_clear_score(cleared.len());
        self.lines_cleared += lines;
        self.score += awarded;

        let spawned = self.spawn_next();
        self.last_event = Some(LockEvent {
            lines_cleared: lines,
            score_awarded: awarded,
            game_over: !spawned,
        });

        lines
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub(crate) fn bump_counter(&mut self) {
        self.counter = self.counter.wrapping_add(1);
    }

    /// Fill a reusable snapshot buffer with the current state.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.grid.write_rows(&mut out.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.lifecycle = self.lifecycle;
        out.score = self.score;
        out.lines_cleared = self.lines_cleared;
        out.counter = self.counter;
        out.player.clone_from(&self.config.player);
    }

    /// Allocate a fresh snapshot of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
