//! Persistence port for the document engine
//!
//! The engine only ever loads the whole document once at startup and
//! overwrites the whole document after every change. Writes are plain
//! overwrites (no temp file + rename), so a failure mid-write can leave a
//! truncated file behind.

use std::path::{Path, PathBuf};

use crate::util::file_validation::{check_document_file, filename_for_display, DocumentFileError};

/// Default backing file, relative to the working directory
pub const DEFAULT_DOCUMENT_PATH: &str = "text_editor_content.txt";

/// Errors raised while reading or writing the backing document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing file exists but cannot be opened as a text document
    Invalid { path: PathBuf, reason: String },
    /// Underlying read failure
    Read { path: PathBuf, message: String },
    /// Underlying write failure
    Write { path: PathBuf, message: String },
}

impl StorageError {
    /// Message shown by the interactive session
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid { path, reason } => {
                format!("{}: {}", filename_for_display(path), reason)
            }
            Self::Read { path, message } | Self::Write { path, message } => {
                format!("{}: {}", filename_for_display(path), message)
            }
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { path, reason } => {
                write!(f, "cannot open {}: {}", path.display(), reason)
            }
            Self::Read { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
            Self::Write { path, message } => {
                write!(f, "failed to write {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Load-whole / save-whole access to the single backing document
pub trait Storage {
    /// Read the entire document. `Ok(None)` means nothing has been persisted yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the entire document with `content`.
    fn save(&mut self, content: &str) -> Result<(), StorageError>;
}

/// Storage backed by one file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_PATH)
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match check_document_file(&self.path) {
            Ok(()) => {}
            Err(DocumentFileError::NotFound) => {
                tracing::debug!("No document at {}, starting empty", self.path.display());
                return Ok(None);
            }
            Err(DocumentFileError::IoError(message)) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    message,
                });
            }
            Err(e) => {
                return Err(StorageError::Invalid {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
        }

        let bytes = std::fs::read(&self.path).map_err(|e| StorageError::Read {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        // Invalid UTF-8 sequences become U+FFFD rather than refusing the document
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    "{} is not valid UTF-8, invalid sequences replaced",
                    self.path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        tracing::info!(
            "Loaded {} chars from {}",
            content.chars().count(),
            self.path.display()
        );
        Ok(Some(content))
    }

    fn save(&mut self, content: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, content).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        tracing::trace!("Saved {} bytes to {}", content.len(), self.path.display());
        Ok(())
    }
}

/// In-memory storage, for tests and benchmarks
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    content: Option<String>,
    fail_saves: bool,
    save_count: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds a persisted document
    pub fn with_content(content: &str) -> Self {
        Self {
            content: Some(content.to_string()),
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail (or succeed again)
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Last successfully saved content
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Number of save attempts, failed ones included
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.content.clone())
    }

    fn save(&mut self, content: &str) -> Result<(), StorageError> {
        self.save_count += 1;
        if self.fail_saves {
            return Err(StorageError::Write {
                path: PathBuf::from("<memory>"),
                message: "simulated write failure".to_string(),
            });
        }
        self.content = Some(content.to_string());
        Ok(())
    }
}
