//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The engine runs them synchronously, before the operation returns.

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Overwrite the backing document with `content`
    SaveFile { content: String },
}

impl Cmd {
    pub fn save(content: impl Into<String>) -> Self {
        Cmd::SaveFile {
            content: content.into(),
        }
    }
}
