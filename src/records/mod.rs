//! Best-time records: the persistence seam the engine consumes but does
//! not own.
//!
//! The engine never reads a clock; elapsed time arrives from the excluded
//! timer layer on a win. The store holds one scalar per level index, and a
//! new time is written only when strictly better than the stored one.
//! Absence of a stored value is "no record", not an error.

use rustc_hash::FxHashMap;
use tracing::debug;

/// External key-value store of best completion times, keyed by level index.
///
/// Implemented by the embedding layer (browser storage, a save file, ...).
/// `MemoryBestTimes` is provided for tests and ephemeral sessions.
pub trait BestTimes {
    /// The stored best time for a level, in seconds, if any.
    fn best(&self, level: usize) -> Option<u64>;

    /// Unconditionally store a best time for a level.
    fn record(&mut self, level: usize, seconds: u64);
}

/// Submit a completion time, writing it only if strictly better than the
/// stored record. Returns whether a new record was written.
pub fn submit(store: &mut dyn BestTimes, level: usize, seconds: u64) -> bool {
    let improved = match store.best(level) {
        None => true,
        Some(best) => seconds < best,
    };
    if improved {
        store.record(level, seconds);
        debug!(level, seconds, "new best time");
    }
    improved
}

/// In-memory best-time store.
#[derive(Clone, Debug, Default)]
pub struct MemoryBestTimes {
    times: FxHashMap<usize, u64>,
}

impl MemoryBestTimes {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestTimes for MemoryBestTimes {
    fn best(&self, level: usize) -> Option<u64> {
        self.times.get(&level).copied()
    }

    fn record(&mut self, level: usize, seconds: u64) {
        self.times.insert(level, seconds);
    }
}
