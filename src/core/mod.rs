//! Core engine types: coordinates, directions, puzzle state, configuration.
//!
//! These are the fundamental building blocks every other module works in
//! terms of. Levels configure the engine via `EngineConfig` rather than by
//! modifying the core.

pub mod config;
pub mod coord;
pub mod state;

pub use config::{EngineConfig, Ruleset, DEFAULT_HISTORY_CAPACITY};
pub use coord::{Coord, Direction};
pub use state::PuzzleState;
