//! blockfall - an embeddable falling-block puzzle engine.
//!
//! The crate simulates the grid/piece core of a Tetris-style game: matrix
//! construction, collision detection, merge-on-lock, rotation with wall
//! kicks, uniform piece spawning, line clearing with scoring, and a
//! tick-driven game loop. Rendering, keyboard decoding, and process
//! bootstrap are the host's job: the engine consumes already-decoded
//! [`GameCommand`]s and exposes a read-only [`SessionSnapshot`] per frame.
//!
//! ```
//! use blockfall::{GameCommand, GameLoop, SessionConfig, UniformSource};
//!
//! let mut game = GameLoop::new(
//!     SessionConfig::default(),
//!     Box::new(UniformSource::new(42)),
//! )
//! .expect("default config is valid");
//!
//! game.apply_command(GameCommand::StartGame);
//! game.advance(1000); // one gravity interval -> one drop
//! game.apply_command(GameCommand::MoveLeft);
//!
//! let snapshot = game.session().snapshot();
//! assert!(snapshot.playable());
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod types;

pub use crate::config::{ConfigError, SessionConfig};
pub use crate::core::rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use crate::core::session::{ActivePiece, DropResult, GameSession, LockEvent};
pub use crate::core::snapshot::{ActiveSnapshot, SessionSnapshot};
pub use crate::engine::{GameLoop, IntervalTimer};
pub use crate::types::{Cell, GameCommand, Lifecycle, PieceKind};
