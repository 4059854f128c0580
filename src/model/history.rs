//! Undo/redo history of whole-buffer snapshots.
//!
//! Every entry is a complete copy of the buffer as it was before a change.
//! Cloning a `Rope` shares its chunks, so a snapshot costs little until one
//! side is edited, but each entry is still a full logical copy.

use ropey::Rope;

/// Linear undo/redo stacks
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    undo_stack: Vec<Rope>,
    redo_stack: Vec<Rope>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the buffer as it was before a new edit. Discards the redo stack.
    pub fn record(&mut self, before: Rope) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Swap `current` for the most recent undo snapshot.
    ///
    /// `current` moves onto the redo stack. Returns `None` (and leaves both
    /// stacks alone) when there is nothing to undo.
    pub fn undo(&mut self, current: Rope) -> Option<Rope> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Swap `current` for the most recently undone snapshot.
    pub fn redo(&mut self, current: Rope) -> Option<Rope> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}
