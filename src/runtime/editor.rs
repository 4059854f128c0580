//! The document engine: owns the document, runs updates, and executes the
//! resulting commands against storage.

use crate::commands::Cmd;
use crate::config::SaveFailurePolicy;
use crate::messages::Msg;
use crate::model::{Document, EditError};
use crate::storage::{Storage, StorageError};
use crate::update::update;

/// Outcome of persisting a successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// Backing document now matches the buffer
    Saved,
    /// Save failed; the change is kept in memory only
    Failed(StorageError),
    /// Save failed and the change was undone in memory
    RolledBack(StorageError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }

    pub fn error(&self) -> Option<&StorageError> {
        match self {
            SaveStatus::Saved => None,
            SaveStatus::Failed(e) | SaveStatus::RolledBack(e) => Some(e),
        }
    }
}

/// A single document bound to its storage
#[derive(Debug)]
pub struct Editor<S: Storage> {
    document: Document,
    storage: S,
    save_failure: SaveFailurePolicy,
    load_error: Option<StorageError>,
}

impl<S: Storage> Editor<S> {
    /// Load the persisted document, or start empty.
    ///
    /// Never fails: a load error is logged, kept for `load_error()`, and the
    /// editor starts with an empty buffer.
    pub fn open(storage: S) -> Self {
        let (document, load_error) = match storage.load() {
            Ok(Some(content)) => (Document::with_text(&content), None),
            Ok(None) => (Document::new(), None),
            Err(e) => {
                tracing::warn!("Failed to load document, starting empty: {}", e);
                (Document::new(), Some(e))
            }
        };

        Self {
            document,
            storage,
            save_failure: SaveFailurePolicy::default(),
            load_error,
        }
    }

    /// Set what happens to an edit whose save fails
    pub fn with_save_failure_policy(mut self, policy: SaveFailurePolicy) -> Self {
        self.save_failure = policy;
        self
    }

    /// Run one operation to completion, persisting the result.
    pub fn dispatch(&mut self, msg: Msg) -> Result<SaveStatus, EditError> {
        let checkpoint = match self.save_failure {
            SaveFailurePolicy::Keep => None,
            SaveFailurePolicy::Rollback => Some(self.document.clone()),
        };

        let cmd = update(&mut self.document, msg)?;
        Ok(self.run(cmd, checkpoint))
    }

    fn run(&mut self, cmd: Cmd, checkpoint: Option<Document>) -> SaveStatus {
        match cmd {
            Cmd::SaveFile { content } => match self.storage.save(&content) {
                Ok(()) => SaveStatus::Saved,
                Err(e) => match checkpoint {
                    Some(previous) => {
                        tracing::warn!("Failed to save document, change rolled back: {}", e);
                        self.document = previous;
                        SaveStatus::RolledBack(e)
                    }
                    None => {
                        tracing::warn!("Failed to save document, change kept in memory: {}", e);
                        SaveStatus::Failed(e)
                    }
                },
            },
        }
    }

    pub fn append(&mut self, text: &str) -> Result<SaveStatus, EditError> {
        self.dispatch(Msg::append(text))
    }

    pub fn delete_range(&mut self, start: i64, length: i64) -> Result<SaveStatus, EditError> {
        self.dispatch(Msg::delete_range(start, length))
    }

    pub fn clear(&mut self) -> Result<SaveStatus, EditError> {
        self.dispatch(Msg::clear())
    }

    pub fn undo(&mut self) -> Result<SaveStatus, EditError> {
        self.dispatch(Msg::undo())
    }

    pub fn redo(&mut self) -> Result<SaveStatus, EditError> {
        self.dispatch(Msg::redo())
    }

    /// Current buffer contents
    pub fn text(&self) -> String {
        self.document.text()
    }

    pub fn len_chars(&self) -> usize {
        self.document.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.document.history.undo_count()
    }

    pub fn redo_depth(&self) -> usize {
        self.document.history.redo_count()
    }

    pub fn can_undo(&self) -> bool {
        self.document.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.document.history.can_redo()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn save_failure_policy(&self) -> SaveFailurePolicy {
        self.save_failure
    }

    /// Error from the initial load, if the document could not be read
    pub fn load_error(&self) -> Option<&StorageError> {
        self.load_error.as_ref()
    }
}
