// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Undo/redo history over markup snapshots.
//!
//! An array of shape-set snapshots plus a cursor, rather than paired
//! undo/redo stacks: pushing after an undo truncates the abandoned branch,
//! and the entry count is capped by dropping the oldest snapshots.

use crate::models::shape::Shape;

/// Maximum number of snapshots retained.
pub const MAX_HISTORY_LENGTH: usize = 10;

/// Bounded undo/redo stack. `entries[step]` is the snapshot currently on
/// display; entry 0 is the empty baseline until the cap drops it.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Vec<Shape>>,
    step: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: vec![Vec::new()],
            step: 0,
        }
    }

    /// Append a snapshot after the cursor, discarding any redo branch and
    /// trimming the oldest entries past the cap. The cursor lands on the
    /// appended snapshot.
    pub fn push(&mut self, shapes: Vec<Shape>) {
        self.entries.truncate(self.step + 1);
        self.entries.push(shapes);
        if self.entries.len() > MAX_HISTORY_LENGTH {
            let excess = self.entries.len() - MAX_HISTORY_LENGTH;
            self.entries.drain(..excess);
        }
        self.step = self.entries.len() - 1;
    }

    /// Step the cursor back one snapshot. No-op at the oldest entry;
    /// read the result through `current`.
    pub fn undo(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Step the cursor forward one snapshot. No-op at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.step + 1 >= self.entries.len() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> &[Shape] {
        &self.entries[self.step]
    }

    pub fn can_undo(&self) -> bool {
        self.step > 0
    }

    pub fn can_redo(&self) -> bool {
        self.step + 1 < self.entries.len()
    }

    /// Drop everything and return to a single empty baseline.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(Vec::new());
        self.step = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
