//! Engine configuration.
//!
//! The engine hardcodes neither the win ruleset nor the undo depth; the
//! embedding layer picks both at session creation. Defaults match the
//! classic rules: targets are covered by discs only.

use serde::{Deserialize, Serialize};

/// Which pieces count as covering a target.
///
/// The two variants differ only in whether the magnet itself can cover a
/// target: a single option on the win evaluator, not two code paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ruleset {
    /// A target is covered iff a disc occupies it.
    #[default]
    DiscOnly,
    /// A target is covered iff a disc or the magnet occupies it.
    DiscOrMagnet,
}

/// Default undo depth. Exists to cap memory, not to limit the player.
pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

/// Session-wide configuration, fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Win ruleset for the target-coverage check.
    pub ruleset: Ruleset,

    /// Maximum undo snapshots retained; the oldest is evicted at capacity.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ruleset: Ruleset::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Configuration with the given ruleset and default history depth.
    #[must_use]
    pub fn with_ruleset(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            ..Self::default()
        }
    }
}
