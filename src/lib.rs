//! # magnet-maze
//!
//! A grid puzzle engine: place a magnet onto empty floor and it pushes
//! every disc on its four cardinal rays one step farther away. The puzzle
//! is solved when every target cell is covered.
//!
//! ## Design Principles
//!
//! 1. **Explicit Sessions**: All state lives in a [`Session`] owned by the
//!    caller. No globals, no background work; every operation is one
//!    synchronous atomic step.
//!
//! 2. **One Legality Authority**: `PuzzleState::is_empty_floor` is the
//!    single predicate behind every placement and push destination check.
//!    Nothing caches it.
//!
//! 3. **Snapshots Over Diffs**: Undo stores whole-state clones. State is
//!    board-bounded and the `im` sets clone in O(1), so the simplest
//!    correct strategy is also cheap.
//!
//! 4. **Pure Rules**: Win evaluation is a pure function recomputed after
//!    every accepted placement; a single push can cover and uncover several
//!    targets at once.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, puzzle state, configuration
//! - `level`: Symbolic-map parsing, validation, built-in catalog
//! - `push`: The push resolver (ray walk, farthest-first relocation)
//! - `rules`: Win evaluation (disc-only or disc-or-magnet coverage)
//! - `history`: Bounded snapshot stack for undo
//! - `session`: The controller state machine and external interface
//! - `records`: Best-time store seam for the embedding layer

pub mod core;
pub mod history;
pub mod level;
pub mod push;
pub mod records;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Coord, Direction, EngineConfig, PuzzleState, Ruleset};

pub use crate::history::History;

pub use crate::level::{catalog, Level, LevelError};

pub use crate::push::resolve_push;

pub use crate::records::{BestTimes, MemoryBestTimes};

pub use crate::session::{CellView, Placement, PlacementError, Session};
