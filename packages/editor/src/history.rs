//! # Snapshot History
//!
//! Undo/redo over the block sequence, modelled as a list of full snapshots
//! plus a cursor. Every committed change stores a deep copy of the whole
//! sequence; undo and redo just move the cursor and hand back the snapshot
//! it lands on, so restoring a state can never half-apply.
//!
//! Memory cost is O(blocks x entries), bounded by a depth cap: once the
//! cap is reached the oldest snapshot falls off. Design settings are not
//! part of the snapshot, so theme changes never consume undo slots.

use pagecraft_blocks::Block;
use tracing::debug;

const DEFAULT_MAX_DEPTH: usize = 100;

/// Snapshot list with a cursor.
///
/// The cursor always points at a valid entry: the state the document
/// currently shows. A fresh history holds exactly the initial sequence,
/// so there is nothing to undo until the first commit.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Block>>,
    cursor: usize,

    /// Maximum number of stored snapshots, current entry included
    /// (0 = unlimited).
    max_depth: usize,
}

impl History {
    /// Start a history whose entry 0 is the current sequence.
    pub fn new(initial: &[Block]) -> Self {
        Self::with_max_depth(initial, DEFAULT_MAX_DEPTH)
    }

    /// Start a history with a custom depth cap (0 = unlimited).
    pub fn with_max_depth(initial: &[Block], max_depth: usize) -> Self {
        Self {
            snapshots: vec![initial.to_vec()],
            cursor: 0,
            max_depth,
        }
    }

    /// Record a committed change.
    ///
    /// Discards every entry after the cursor (a new change invalidates the
    /// redo path), stores a deep copy of the sequence and advances the
    /// cursor onto it. The oldest entry falls off once the cap is hit.
    pub fn commit(&mut self, snapshot: &[Block]) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot.to_vec());
        self.cursor += 1;

        if self.max_depth > 0 && self.snapshots.len() > self.max_depth {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }

        debug!(
            entries = self.snapshots.len(),
            cursor = self.cursor,
            "Committed history entry"
        );
    }

    /// Step back one entry and return the snapshot to restore.
    ///
    /// `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&[Block]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "Undo");
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one entry and return the snapshot to restore.
    ///
    /// `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&[Block]> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "Redo");
        Some(&self.snapshots[self.cursor])
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots, current entry included.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Index of the entry the document currently shows.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
