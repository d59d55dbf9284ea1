//! Win evaluation: ruleset-parameterized target coverage.
//!
//! Pure functions of the current state. The session recomputes the win
//! condition from scratch after every accepted placement; a single push can
//! cover and uncover several targets at once, so nothing here is cached.

use crate::core::{Coord, PuzzleState, Ruleset};

/// Whether `cell` counts as covered under `ruleset`.
///
/// Only meaningful for target cells, but defined for any coordinate.
#[must_use]
pub fn is_covered(state: &PuzzleState, cell: Coord, ruleset: Ruleset) -> bool {
    match ruleset {
        Ruleset::DiscOnly => state.is_disc(cell),
        Ruleset::DiscOrMagnet => state.is_disc(cell) || state.is_magnet(cell),
    }
}

/// Number of covered targets, for progress display.
#[must_use]
pub fn covered_count(state: &PuzzleState, ruleset: Ruleset) -> usize {
    state
        .targets()
        .filter(|&target| is_covered(state, target, ruleset))
        .count()
}

/// Whether the puzzle is solved: a non-empty target set with every target
/// covered. An empty target set never wins; that is a malformed level, and
/// the level loader rejects it before play anyway.
#[must_use]
pub fn evaluate_win(state: &PuzzleState, ruleset: Ruleset) -> bool {
    state.target_count() > 0
        && state
            .targets()
            .all(|target| is_covered(state, target, ruleset))
}
