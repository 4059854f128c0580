//! Document model - the text buffer and its snapshot history

use std::ops::Range;

use ropey::Rope;

use super::history::SnapshotHistory;

/// Reasons an edit or history step was refused. Refused operations leave
/// the document untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Delete start outside `0..len`
    InvalidStart { start: i64, len: usize },
    NothingToUndo,
    NothingToRedo,
}

impl EditError {
    /// Message shown by the interactive session
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidStart { .. } => "Invalid start position.",
            Self::NothingToUndo => "Nothing to undo.",
            Self::NothingToRedo => "Nothing to redo.",
        }
    }
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStart { start, len } => {
                write!(f, "invalid start position {} (length {})", start, len)
            }
            Self::NothingToUndo => write!(f, "nothing to undo"),
            Self::NothingToRedo => write!(f, "nothing to redo"),
        }
    }
}

impl std::error::Error for EditError {}

/// Document state - the buffer plus undo/redo snapshots
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Undo/redo snapshots (not persisted)
    pub history: SnapshotHistory,
    /// Incremented on every change to `buffer`, undo and redo included
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with initial text and empty history
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            ..Self::default()
        }
    }

    /// Full buffer contents
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Length in chars
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_chars() == 0
    }

    /// Resolve a `(start, length)` delete request to a char range.
    ///
    /// `start` must fall inside the buffer. The end is clamped to the buffer
    /// length, and a non-positive `length` yields an empty range at `start`.
    pub fn delete_range(&self, start: i64, length: i64) -> Result<Range<usize>, EditError> {
        let len = self.len_chars();
        let start = usize::try_from(start)
            .ok()
            .filter(|&s| s < len)
            .ok_or(EditError::InvalidStart { start, len })?;

        let end = if length <= 0 {
            start
        } else {
            let length = usize::try_from(length).unwrap_or(usize::MAX);
            start.saturating_add(length).min(len)
        };

        Ok(start..end)
    }

    /// Snapshot the buffer onto the undo stack before a new edit
    pub(crate) fn begin_edit(&mut self) {
        self.history.record(self.buffer.clone());
    }

    pub(crate) fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_text() {
        let doc = Document::with_text("hello");
        assert_eq!(doc.text(), "hello");
        assert_eq!(doc.len_chars(), 5);
        assert!(!doc.history.can_undo());
    }

    #[test]
    fn test_delete_range_clamps_end() {
        let doc = Document::with_text("abcdef");
        assert_eq!(doc.delete_range(4, 100), Ok(4..6));
    }

    #[test]
    fn test_delete_range_non_positive_length_is_empty() {
        let doc = Document::with_text("abc");
        assert_eq!(doc.delete_range(1, 0), Ok(1..1));
        assert_eq!(doc.delete_range(1, -5), Ok(1..1));
    }

    #[test]
    fn test_delete_range_huge_length() {
        let doc = Document::with_text("abc");
        assert_eq!(doc.delete_range(2, i64::MAX), Ok(2..3));
    }

    #[test]
    fn test_delete_range_rejects_bad_start() {
        let doc = Document::with_text("abc");
        assert_eq!(
            doc.delete_range(3, 1),
            Err(EditError::InvalidStart { start: 3, len: 3 })
        );
        assert_eq!(
            doc.delete_range(-1, 1),
            Err(EditError::InvalidStart { start: -1, len: 3 })
        );
    }

    #[test]
    fn test_delete_range_on_empty_document() {
        let doc = Document::new();
        assert!(doc.delete_range(0, 1).is_err());
    }

    #[test]
    fn test_delete_range_counts_chars_not_bytes() {
        let doc = Document::with_text("héllo");
        assert_eq!(doc.delete_range(4, 1), Ok(4..5));
        assert!(doc.delete_range(5, 1).is_err());
    }
}
