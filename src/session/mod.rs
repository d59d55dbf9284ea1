//! Puzzle session: the state machine tying the engine together.
//!
//! A `Session` is an explicit object owned by the caller; there is no
//! ambient global state. The embedding layer feeds it placement intents and
//! undo/reset commands and reads occupancy back out for rendering.
//!
//! ## State machine
//!
//! - **Idle**: magnet not selected.
//! - **Selected**: magnet picked up, awaiting a placement target. Selection
//!   clears after every placement attempt, accepted or rejected, and on
//!   explicit cancel, undo, reset, and load.
//! - **Won**: terminal; placements are rejected until `undo` or `reset`.
//!   Undo out of Won is deliberate: it is the only way to retry without a
//!   full reset.
//!
//! Every operation is a single synchronous atomic step. There is exactly
//! one actor and no in-flight work, so "cancel" is just deselection.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{Coord, EngineConfig, PuzzleState};
use crate::history::History;
use crate::level::Level;
use crate::push::resolve_push;
use crate::rules;

/// A rejected placement attempt. Both variants are ordinary recoverable
/// outcomes; the caller simply tries a different action next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The destination cell is not empty floor.
    #[error("destination is not empty floor")]
    InvalidPlacement,

    /// The puzzle is already solved; undo or reset first.
    #[error("puzzle is already solved")]
    GameAlreadyWon,
}

/// Feedback for an accepted placement. `pushed` drives secondary feedback
/// cues only; acceptance never depends on whether any disc moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Whether any disc moved as a result of the placement.
    pub pushed: bool,
}

/// What occupies a cell, for rendering. `target` marks the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Wall { target: bool },
    Floor { target: bool },
    Disc { target: bool },
    Magnet { target: bool },
}

/// One live puzzle: level, current state, undo history, selection flag.
#[derive(Clone, Debug)]
pub struct Session {
    level: Level,
    config: EngineConfig,
    state: PuzzleState,
    history: History,
    selected: bool,
}

impl Session {
    /// Start a session on an already parsed level.
    #[must_use]
    pub fn new(level: Level, config: EngineConfig) -> Self {
        let state = level.initial_state();
        debug!(
            width = state.width(),
            height = state.height(),
            discs = state.disc_count(),
            targets = state.target_count(),
            "session loaded"
        );
        Self {
            level,
            config,
            state,
            history: History::new(config.history_capacity),
            selected: false,
        }
    }

    /// Parse a symbolic map and start a session on it.
    pub fn from_map(rows: &[&str], config: EngineConfig) -> Result<Self, crate::level::LevelError> {
        Ok(Self::new(Level::parse(rows)?, config))
    }

    /// Attempt to place the magnet on `cell`.
    ///
    /// On acceptance: a snapshot is pushed, the magnet moves, discs on the
    /// four rays are pushed one step outward, the move counter increments,
    /// and the win condition is re-evaluated. On rejection nothing mutates:
    /// no snapshot, no move count, no state change. The selection flag
    /// clears either way; there is no "try again without reselecting".
    pub fn attempt_placement(&mut self, cell: Coord) -> Result<Placement, PlacementError> {
        self.selected = false;

        if self.state.won() {
            return Err(PlacementError::GameAlreadyWon);
        }
        if !self.state.is_empty_floor(cell) {
            return Err(PlacementError::InvalidPlacement);
        }

        self.history.push(self.state.clone());
        self.state.magnet = cell;
        let pushed = resolve_push(&mut self.state);
        self.state.moves += 1;
        self.state.won = rules::evaluate_win(&self.state, self.config.ruleset);

        debug!(
            magnet = %cell,
            pushed,
            moves = self.state.moves(),
            won = self.state.won(),
            "placement accepted"
        );
        Ok(Placement { pushed })
    }

    /// Toggle the selection flag. Only meaningful when `cell` is the
    /// magnet's current cell and the puzzle is not won; anywhere else this
    /// is a no-op. Returns the selection state after the call.
    pub fn toggle_selection(&mut self, cell: Coord) -> bool {
        if !self.state.won() && self.state.is_magnet(cell) {
            self.selected = !self.selected;
        }
        self.selected
    }

    /// Explicitly deselect the magnet.
    pub fn cancel_selection(&mut self) {
        self.selected = false;
    }

    /// Restore the most recent snapshot, replacing the live state
    /// wholesale. Always deselects. Permitted from Won. Returns whether a
    /// snapshot was available.
    pub fn undo(&mut self) -> bool {
        self.selected = false;
        match self.history.pop() {
            Some(snapshot) => {
                self.state = snapshot;
                debug!(moves = self.state.moves(), "undo restored snapshot");
                true
            }
            None => false,
        }
    }

    /// Reload the level's initial state, clearing history, selection, and
    /// the move counter.
    pub fn reset(&mut self) {
        self.state = self.level.initial_state();
        self.history.clear();
        self.selected = false;
        debug!("session reset");
    }

    // === Read-only queries ===

    /// The live puzzle state.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// The level this session was created from.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Whether the magnet is currently picked up.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the puzzle is solved.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.won()
    }

    /// Accepted placements so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.state.moves()
    }

    /// Covered targets under the session ruleset.
    #[must_use]
    pub fn covered_count(&self) -> usize {
        rules::covered_count(&self.state, self.config.ruleset)
    }

    /// Total targets in the level.
    #[must_use]
    pub fn total_targets(&self) -> usize {
        self.state.target_count()
    }

    /// Undo depth currently available.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// What occupies `cell`, for rendering. Out-of-bounds reads render as
    /// walls so the caller never needs a bounds check of its own.
    #[must_use]
    pub fn cell_at(&self, cell: Coord) -> CellView {
        let target = self.state.is_target(cell);
        if !self.state.in_bounds(cell) || self.state.is_wall(cell) {
            CellView::Wall { target }
        } else if self.state.is_disc(cell) {
            CellView::Disc { target }
        } else if self.state.is_magnet(cell) {
            CellView::Magnet { target }
        } else {
            CellView::Floor { target }
        }
    }

    /// Iterate the whole board row-major for rendering.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellView)> + '_ {
        let width = self.state.width();
        let height = self.state.height();
        (0..height).flat_map(move |y| {
            (0..width).map(move |x| {
                let cell = Coord::new(x, y);
                (cell, self.cell_at(cell))
            })
        })
    }
}
