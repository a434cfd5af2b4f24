//! Session configuration surface.
//!
//! All knobs are fixed at session construction; the engine never reloads
//! configuration mid-game.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::grid::{GridError, MAX_DIMENSION};
use crate::types::{
    DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_COUNTER_INTERVAL_MS,
    DEFAULT_GRAVITY_INTERVAL_MS,
};

/// Configuration for one game session.
///
/// Defaults match the classic 8x20 arena with one-second gravity and counter
/// intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Arena width in columns.
    pub width: u8,
    /// Arena height in rows.
    pub height: u8,
    /// Milliseconds between gravity drops.
    pub gravity_interval_ms: u32,
    /// Milliseconds between elapsed-time counter increments.
    pub counter_interval_ms: u32,
    /// Optional player tag, echoed in snapshots for the host's scoreboard.
    pub player: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
            gravity_interval_ms: DEFAULT_GRAVITY_INTERVAL_MS,
            counter_interval_ms: DEFAULT_COUNTER_INTERVAL_MS,
            player: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Arena dimensions must be positive and fit the engine's coordinate
    /// space.
    InvalidDimension { width: u8, height: u8 },
    /// Timer intervals must be positive.
    InvalidInterval { interval_ms: u32 },
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::InvalidDimension { .. } => "invalid_dimension",
            ConfigError::InvalidInterval { .. } => "invalid_interval",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimension { width, height } => {
                write!(f, "invalid arena dimensions {}x{}", width, height)
            }
            ConfigError::InvalidInterval { interval_ms } => {
                write!(f, "invalid timer interval {}ms", interval_ms)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidDimension { width, height } => {
                ConfigError::InvalidDimension { width, height }
            }
        }
    }
}

impl SessionConfig {
    /// Check every field before a session is built from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(ConfigError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval {
                interval_ms: self.gravity_interval_ms,
            });
        }
        if self.counter_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval {
                interval_ms: self.counter_interval_ms,
            });
        }
        Ok(())
    }
}
