//! Engine module - the timed loop wrapped around a session

pub mod game_loop;

pub use game_loop::{GameLoop, IntervalTimer};
