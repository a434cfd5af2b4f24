//! Core types shared across the engine
//! This module contains pure data types with no dependencies on the rest of
//! the crate.

use serde::{Deserialize, Serialize};

/// A single grid cell: 0 is empty, nonzero carries the id of the piece that
/// filled it (so renderers can color locked cells per piece).
pub type Cell = u8;

/// Default arena dimensions (columns x rows)
pub const DEFAULT_ARENA_WIDTH: u8 = 8;
pub const DEFAULT_ARENA_HEIGHT: u8 = 20;

/// Default timer intervals (milliseconds)
pub const DEFAULT_GRAVITY_INTERVAL_MS: u32 = 1000;
pub const DEFAULT_COUNTER_INTERVAL_MS: u32 = 1000;

/// Points per round, indexed by the number of lines cleared in that round.
/// Multi-line clears reward super-linearly.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds, in catalog key order `O T S Z L J I`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    O,
    T,
    S,
    Z,
    L,
    J,
    I,
}

impl PieceKind {
    /// All kinds in catalog key order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
    ];

    /// Parse a kind from its single-character catalog key
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'I' => Some(PieceKind::I),
            _ => None,
        }
    }

    /// The single-character catalog key
    pub fn as_key(&self) -> char {
        match self {
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::I => 'I',
        }
    }

    /// The nonzero cell value this kind writes into the grid (1..=7).
    pub fn cell_value(&self) -> Cell {
        match self {
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
            PieceKind::I => 7,
        }
    }
}

/// Session lifecycle
///
/// `GameOver` is a normal terminal outcome, not a failure; a session never
/// leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    Idle,
    Running,
    GameOver,
}

impl Lifecycle {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Idle => "idle",
            Lifecycle::Running => "running",
            Lifecycle::GameOver => "game_over",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Lifecycle::GameOver)
    }
}

/// Discrete, already-decoded input commands the engine consumes.
/// Decoding raw input events into these is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    RotateCw,
    SoftDrop,
    StartGame,
    StopGame,
}

impl GameCommand {
    /// Parse a command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "rotatecw" => Some(GameCommand::RotateCw),
            "softdrop" => Some(GameCommand::SoftDrop),
            "startgame" => Some(GameCommand::StartGame),
            "stopgame" => Some(GameCommand::StopGame),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::StartGame => "startGame",
            GameCommand::StopGame => "stopGame",
        }
    }
}
