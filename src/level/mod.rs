//! Level definitions: symbolic-map parsing and load-time validation.
//!
//! A level is authored as a rectangular block of text rows using five
//! symbols: wall `#`, floor `.`, magnet start `@` (exactly one), disc `o`,
//! target `x`. Rows shorter than the widest row are right-padded with
//! walls, so the parsed board is always rectangular.
//!
//! Malformed maps (no magnet, several magnets, no targets, stray symbols)
//! are content-authoring defects; they are rejected here at load time
//! rather than silently degrading during play.

pub mod catalog;

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Coord, PuzzleState};

/// Wall symbol; also the padding for short rows.
pub const SYMBOL_WALL: char = '#';
/// Empty floor symbol.
pub const SYMBOL_FLOOR: char = '.';
/// Magnet starting cell symbol. Exactly one per level.
pub const SYMBOL_MAGNET: char = '@';
/// Disc symbol.
pub const SYMBOL_DISC: char = 'o';
/// Target symbol.
pub const SYMBOL_TARGET: char = 'x';

/// A symbolic map that failed load-time validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    /// The map has no rows, or every row is empty.
    #[error("level map is empty")]
    EmptyMap,

    /// A character outside the five-symbol alphabet.
    #[error("unknown symbol {symbol:?} at {at}")]
    UnknownSymbol { symbol: char, at: Coord },

    /// No magnet start cell in the map.
    #[error("level has no magnet start cell")]
    NoMagnet,

    /// More than one magnet start cell.
    #[error("level has more than one magnet start cell ({first} and {second})")]
    MultipleMagnets { first: Coord, second: Coord },

    /// No target cells: the win condition could never fire.
    #[error("level has no target cells")]
    NoTargets,
}

/// The immutable parse result for one level.
///
/// Retained by the session for the lifetime of the level so `reset` can
/// rebuild the initial state without re-parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    width: i32,
    height: i32,
    walls: ImHashSet<Coord>,
    targets: ImHashSet<Coord>,
    discs: ImHashSet<Coord>,
    magnet: Coord,
}

impl Level {
    /// Parse and validate a symbolic map.
    ///
    /// Short rows are right-padded with walls. Fails on an empty map, any
    /// unknown symbol, zero or multiple magnet cells, or zero targets.
    pub fn parse(rows: &[&str]) -> Result<Self, LevelError> {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(LevelError::EmptyMap);
        }

        let mut walls = ImHashSet::new();
        let mut targets = ImHashSet::new();
        let mut discs = ImHashSet::new();
        let mut magnet: Option<Coord> = None;

        for (y, row) in rows.iter().enumerate() {
            let mut x = 0usize;
            for symbol in row.chars() {
                let at = Coord::new(x as i32, y as i32);
                match symbol {
                    SYMBOL_WALL => {
                        walls.insert(at);
                    }
                    SYMBOL_FLOOR => {}
                    SYMBOL_MAGNET => match magnet {
                        None => magnet = Some(at),
                        Some(first) => {
                            return Err(LevelError::MultipleMagnets { first, second: at })
                        }
                    },
                    SYMBOL_DISC => {
                        discs.insert(at);
                    }
                    SYMBOL_TARGET => {
                        targets.insert(at);
                    }
                    other => return Err(LevelError::UnknownSymbol { symbol: other, at }),
                }
                x += 1;
            }
            // Pad short rows out to the full width with walls.
            while x < width {
                walls.insert(Coord::new(x as i32, y as i32));
                x += 1;
            }
        }

        let magnet = magnet.ok_or(LevelError::NoMagnet)?;
        if targets.is_empty() {
            return Err(LevelError::NoTargets);
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            walls,
            targets,
            discs,
            magnet,
        })
    }

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

    /// The magnet's starting cell.
    #[must_use]
    pub fn magnet_start(&self) -> Coord {
        self.magnet
    }

    /// Number of target cells.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of discs.
    #[must_use]
    pub fn disc_count(&self) -> usize {
        self.discs.len()
    }

    /// Build the fresh state for this level.
    ///
    /// The won flag starts false regardless of piece layout; the win
    /// evaluator only runs after accepted placements.
    #[must_use]
    pub fn initial_state(&self) -> PuzzleState {
        PuzzleState {
            width: self.width,
            height: self.height,
            walls: self.walls.clone(),
            targets: self.targets.clone(),
            discs: self.discs.clone(),
            magnet: self.magnet,
            won: false,
            moves: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_level() {
        let level = Level::parse(&[
            "#####",
            "#@o.#",
            "#.x.#",
            "#####",
        ])
        .unwrap();

        assert_eq!(level.width(), 5);
        assert_eq!(level.height(), 4);
        assert_eq!(level.magnet_start(), Coord::new(1, 1));
        assert_eq!(level.disc_count(), 1);
        assert_eq!(level.target_count(), 1);
    }

    #[test]
    fn test_short_rows_padded_with_walls() {
        let level = Level::parse(&[
            "#####",
            "#@x#",
            "#####",
        ])
        .unwrap();

        let state = level.initial_state();
        assert_eq!(level.width(), 5);
        // The padded cell is a wall, not floor.
        assert!(state.is_wall(Coord::new(4, 1)));
    }

    #[test]
    fn test_empty_map_rejected() {
        assert_eq!(Level::parse(&[]), Err(LevelError::EmptyMap));
        assert_eq!(Level::parse(&["", ""]), Err(LevelError::EmptyMap));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        let err = Level::parse(&["#@?x#"]).unwrap_err();
        assert_eq!(
            err,
            LevelError::UnknownSymbol {
                symbol: '?',
                at: Coord::new(2, 0)
            }
        );
    }

    #[test]
    fn test_no_magnet_rejected() {
        assert_eq!(Level::parse(&["#.x.#"]), Err(LevelError::NoMagnet));
    }

    #[test]
    fn test_multiple_magnets_rejected() {
        let err = Level::parse(&["#@.@x#"]).unwrap_err();
        assert_eq!(
            err,
            LevelError::MultipleMagnets {
                first: Coord::new(1, 0),
                second: Coord::new(3, 0)
            }
        );
    }

    #[test]
    fn test_no_targets_rejected() {
        assert_eq!(Level::parse(&["#@o.#"]), Err(LevelError::NoTargets));
    }

    #[test]
    fn test_error_display() {
        let err = LevelError::UnknownSymbol {
            symbol: 'Z',
            at: Coord::new(1, 2),
        };
        assert_eq!(format!("{err}"), "unknown symbol 'Z' at (1, 2)");
    }

    #[test]
    fn test_initial_state_matches_level() {
        let level = Level::parse(&[
            "######",
            "#@.o.#",
            "#.x..#",
            "######",
        ])
        .unwrap();
        let state = level.initial_state();

        assert_eq!(state.magnet(), Coord::new(1, 1));
        assert_eq!(state.disc_count(), 1);
        assert_eq!(state.target_count(), 1);
        assert_eq!(state.moves(), 0);
        assert!(!state.won());
    }
}
