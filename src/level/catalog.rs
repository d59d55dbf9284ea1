//! Compiled-in level catalog.
//!
//! Levels are static data; there is no external level-file format. The
//! presentation layer looks entries up by index and keys its best-time
//! store off the same index.

use super::Level;

/// One authored level: a display label plus its symbolic map.
#[derive(Clone, Copy, Debug)]
pub struct LevelEntry {
    pub label: &'static str,
    pub map: &'static [&'static str],
}

/// All built-in levels, in play order.
pub const LEVELS: &[LevelEntry] = &[
    LevelEntry {
        label: "First Push",
        map: &[
            "########",
            "#......#",
            "#..o...#",
            "#..x...#",
            "#.@....#",
            "########",
        ],
    },
    LevelEntry {
        label: "Crossfire",
        map: &[
            "#########",
            "#...x...#",
            "#...o...#",
            "#.xo@ox.#",
            "#...o...#",
            "#...x...#",
            "#########",
        ],
    },
    LevelEntry {
        label: "Tandem",
        map: &[
            "#########",
            "#.......#",
            "#.oo..x.#",
            "#.@...x.#",
            "#.oo....#",
            "#.......#",
            "#########",
        ],
    },
    LevelEntry {
        label: "Blockade",
        map: &[
            "##########",
            "#....#...#",
            "#.o..#.x.#",
            "#....#...#",
            "#.@.o..x.#",
            "#....#...#",
            "##########",
        ],
    },
    LevelEntry {
        label: "Corners",
        map: &[
            "##########",
            "#x......x#",
            "#..o..o..#",
            "#....@...#",
            "#..o..o..#",
            "#x......x#",
            "##########",
        ],
    },
];

/// Look up a level by catalog index.
#[must_use]
pub fn entry(index: usize) -> Option<&'static LevelEntry> {
    LEVELS.get(index)
}

/// Look up a level by label, case-insensitively.
#[must_use]
pub fn entry_by_label(label: &str) -> Option<&'static LevelEntry> {
    let trimmed = label.trim();
    LEVELS
        .iter()
        .find(|entry| entry.label.eq_ignore_ascii_case(trimmed))
}

/// Parse a catalog level. Catalog maps are validated by test, so parsing
/// only fails if an entry was edited into an invalid state.
pub fn load(index: usize) -> Option<Level> {
    entry(index).map(|entry| {
        Level::parse(entry.map).unwrap_or_else(|err| {
            unreachable!("catalog level {index} ({}) is invalid: {err}", entry.label)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_catalog_levels_parse() {
        for (index, entry) in LEVELS.iter().enumerate() {
            let level = Level::parse(entry.map)
                .unwrap_or_else(|err| panic!("level {index} ({}): {err}", entry.label));
            assert!(level.target_count() > 0);
        }
    }

    #[test]
    fn test_catalog_levels_have_enough_discs() {
        // Under the disc-only ruleset every target needs its own disc.
        for entry in LEVELS {
            let level = Level::parse(entry.map).unwrap();
            assert!(
                level.disc_count() >= level.target_count(),
                "{}: {} discs for {} targets",
                entry.label,
                level.disc_count(),
                level.target_count()
            );
        }
    }

    #[test]
    fn test_lookup_by_index() {
        assert_eq!(entry(0).unwrap().label, "First Push");
        assert!(entry(LEVELS.len()).is_none());
    }

    #[test]
    fn test_lookup_by_label() {
        assert!(entry_by_label("crossfire").is_some());
        assert!(entry_by_label("  Tandem  ").is_some());
        assert!(entry_by_label("missing").is_none());
    }

    #[test]
    fn test_load() {
        let level = load(1).unwrap();
        assert_eq!(level.width(), 9);
        assert!(load(999).is_none());
    }
}
