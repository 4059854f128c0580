//! Message types for the Elm-style architecture
//!
//! Every engine operation that can change the document is one message.

/// Document messages (editing and history)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Append text at the end of the buffer
    Append(String),
    /// Delete `length` chars starting at char `start`
    DeleteRange { start: i64, length: i64 },
    /// Delete everything
    Clear,
    /// Restore the previous snapshot
    Undo,
    /// Re-apply the last undone snapshot
    Redo,
}

impl DocumentMsg {
    /// Whether this is a new edit (as opposed to a history step)
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Append(_) | Self::DeleteRange { .. } | Self::Clear
        )
    }
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Document(DocumentMsg),
}

// Convenience constructors
impl Msg {
    pub fn append(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::Append(text.into()))
    }

    pub fn delete_range(start: i64, length: i64) -> Self {
        Msg::Document(DocumentMsg::DeleteRange { start, length })
    }

    pub fn clear() -> Self {
        Msg::Document(DocumentMsg::Clear)
    }

    pub fn undo() -> Self {
        Msg::Document(DocumentMsg::Undo)
    }

    pub fn redo() -> Self {
        Msg::Document(DocumentMsg::Redo)
    }
}
