//! Puzzle state: board geometry and piece positions.
//!
//! ## Occupancy classes
//!
//! A cell holds at most one of {wall, disc, magnet}; the three sets are
//! pairwise disjoint over the coordinate space. Targets are an overlay and
//! may coincide with any of them.
//!
//! ## Snapshots
//!
//! `PuzzleState` uses `im` persistent sets, so `clone()` is O(1) and the
//! clone is fully independent of the original. The undo history stores
//! plain clones of this type.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Complete mutable puzzle state for one level.
///
/// Created by `Level::initial_state`, mutated in place by accepted
/// placements, and replaced wholesale by undo and reset. Walls and targets
/// never change during play but live here anyway so a snapshot is a single
/// `clone()` with no shared mutable parts to reason about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleState {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) walls: ImHashSet<Coord>,
    pub(crate) targets: ImHashSet<Coord>,
    pub(crate) discs: ImHashSet<Coord>,
    pub(crate) magnet: Coord,
    pub(crate) won: bool,
    pub(crate) moves: u32,
}

impl PuzzleState {
    /// Board width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The magnet's current cell.
    #[must_use]
    pub fn magnet(&self) -> Coord {
        self.magnet
    }

    /// Whether the win condition held after the last accepted placement.
    #[must_use]
    pub fn won(&self) -> bool {
        self.won
    }

    /// Accepted placements so far this level.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Number of discs on the board. Invariant across turns.
    #[must_use]
    pub fn disc_count(&self) -> usize {
        self.discs.len()
    }

    /// Number of target cells. Fixed at load time.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Iterate over all disc cells, in no particular order.
    pub fn discs(&self) -> impl Iterator<Item = Coord> + '_ {
        self.discs.iter().copied()
    }

    /// Iterate over all target cells, in no particular order.
    pub fn targets(&self) -> impl Iterator<Item = Coord> + '_ {
        self.targets.iter().copied()
    }

    /// Iterate over all wall cells, in no particular order.
    pub fn walls(&self) -> impl Iterator<Item = Coord> + '_ {
        self.walls.iter().copied()
    }

    // === Occupancy queries ===

    /// Whether `cell` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, cell: Coord) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    /// Whether `cell` is a wall.
    #[must_use]
    pub fn is_wall(&self, cell: Coord) -> bool {
        self.walls.contains(&cell)
    }

    /// Whether `cell` holds a disc.
    #[must_use]
    pub fn is_disc(&self, cell: Coord) -> bool {
        self.discs.contains(&cell)
    }

    /// Whether `cell` is the magnet's cell.
    #[must_use]
    pub fn is_magnet(&self, cell: Coord) -> bool {
        self.magnet == cell
    }

    /// Whether `cell` is a target.
    #[must_use]
    pub fn is_target(&self, cell: Coord) -> bool {
        self.targets.contains(&cell)
    }

    /// The single authority for "can a piece go here": in bounds, not a
    /// wall, no disc, not the magnet. Every mutation re-derives legality
    /// from this predicate; nothing caches it.
    #[must_use]
    pub fn is_empty_floor(&self, cell: Coord) -> bool {
        self.in_bounds(cell)
            && !self.is_wall(cell)
            && !self.is_disc(cell)
            && !self.is_magnet(cell)
    }

    // === Mutation (crate-internal; the session and push resolver only) ===

    /// Relocate a disc. Caller has already established that `from` holds a
    /// disc and `to` is empty floor.
    pub(crate) fn move_disc(&mut self, from: Coord, to: Coord) {
        debug_assert!(self.discs.contains(&from));
        debug_assert!(self.is_empty_floor(to));
        self.discs.remove(&from);
        self.discs.insert(to);
    }
}
