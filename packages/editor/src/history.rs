//! # Undo/Redo History
//!
//! Per-canvas, size-bounded stack of full-tree snapshots with a cursor.
//! `stack[cursor]` is always the current state, so a canvas is seeded with
//! one snapshot of its initial (empty) forest at creation. Recording while
//! not at the tail discards the redo branch first; overflowing the cap
//! evicts the oldest entry and leaves the cursor on the same logical tail.
//!
//! Restore is a plain accessor (`undo`/`redo` return the snapshot to apply)
//! rather than a callback into the store, so applying a snapshot can never
//! re-enter recording.

use lvforge_schema::widget::Widget;
use serde::{Deserialize, Serialize};

pub const HISTORY_CAP: usize = 50;

/// Immutable deep copy of a canvas's mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub widgets: Vec<Widget>,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Starts a history with the canvas's initial state as its only entry.
    pub fn seeded(initial: Snapshot) -> Self {
        Self {
            stack: vec![initial],
            cursor: 0,
        }
    }

    pub fn record(&mut self, snapshot: Snapshot) {
        self.stack.truncate(self.cursor + 1);
        self.stack.push(snapshot);
        if self.stack.len() > HISTORY_CAP {
            self.stack.remove(0);
        } else {
            self.cursor += 1;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    /// Steps the cursor back and returns the snapshot to restore.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.stack.get(self.cursor)
    }

    /// Steps the cursor forward and returns the snapshot to restore.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.stack.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
