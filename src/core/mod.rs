//! Core module - pure game rules
//!
//! Grid, pieces, collision, rotation, randomization, scoring, and the
//! session state machine. Zero dependencies on timers, input, or rendering,
//! so every rule is unit-testable in isolation.

pub mod collision;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod rotate;
pub mod scoring;
pub mod session;
pub mod snapshot;

// Re-export commonly used items
pub use collision::collides;
pub use grid::{Grid, GridError};
pub use pieces::{lookup, shape_of, CatalogError, Shape};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use rotate::{attempt_rotate, rotated_cw};
pub use scoring::line_clear_score;
pub use session::{ActivePiece, DropResult, GameSession, LockEvent};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
