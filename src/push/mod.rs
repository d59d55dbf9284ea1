//! Push resolution: relocate discs away from a newly placed magnet.
//!
//! ## Algorithm
//!
//! For each cardinal direction independently:
//!
//! 1. Walk outward from the magnet's cell until the first wall or the board
//!    edge, collecting every disc on the ray in walk order. Walls fully
//!    block a ray; a disc behind a wall is never even visited.
//! 2. Relocate the collected discs farthest-from-magnet first, each by one
//!    step outward, when the destination is empty floor. The ordering is
//!    load-bearing: the farther of two adjacent discs vacates its cell
//!    before the nearer one's destination check runs, so adjacent discs
//!    push as a chain and no destination is ever claimed twice.
//! 3. A blocked disc simply stays put; that is a no-op, not an error.
//!
//! The four directions share the pre-push disc layout for ray building.
//! This is an invariant, not luck: each disc lies on at most one of the
//! four rays emanating from a single cell, so a move made while resolving
//! one direction can never add or remove a disc on another direction's ray.

use smallvec::SmallVec;

use crate::core::{Coord, Direction, PuzzleState};

/// Relocate every pushable disc one step away from the magnet's current
/// cell. Returns whether any disc moved, for the feedback layer only; the
/// placement itself was already legal.
pub fn resolve_push(state: &mut PuzzleState) -> bool {
    let magnet = state.magnet();
    let mut moved = false;

    for dir in Direction::ALL {
        // Ray discs in walk order, nearest to the magnet first.
        let mut ray: SmallVec<[Coord; 8]> = SmallVec::new();
        let mut cell = magnet.step(dir);
        while state.in_bounds(cell) && !state.is_wall(cell) {
            if state.is_disc(cell) {
                ray.push(cell);
            }
            cell = cell.step(dir);
        }

        // Farthest first, so chains compact outward without collisions.
        for &disc in ray.iter().rev() {
            let dest = disc.step(dir);
            if state.is_empty_floor(dest) {
                state.move_disc(disc, dest);
                moved = true;
            }
        }
    }

    moved
}
