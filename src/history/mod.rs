//! Undo history: a bounded LIFO stack of whole-state snapshots.
//!
//! Snapshots are plain `PuzzleState` clones; the `im` sets inside make the
//! clone O(1) and fully independent of the live state. The stack evicts its
//! oldest entry when full (FIFO at capacity, LIFO pop otherwise), so memory
//! stays bounded no matter how long a session runs.

use std::collections::VecDeque;

use crate::core::PuzzleState;

/// Bounded snapshot stack.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: VecDeque<PuzzleState>,
    capacity: usize,
}

impl History {
    /// Create an empty history with the given capacity. A capacity of zero
    /// disables undo entirely.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Push a snapshot, evicting the oldest entry if at capacity.
    pub fn push(&mut self, snapshot: PuzzleState) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Remove and return the most recent snapshot, if any. Popping an empty
    /// history is an ordinary `None`, not an error.
    pub fn pop(&mut self) -> Option<PuzzleState> {
        self.snapshots.pop_back()
    }

    /// Drop every snapshot. Called on level load and reset; undo never
    /// crosses a level boundary.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshots are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Configured maximum depth.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
