//! Checks run on the backing document before it is loaded
//!
//! Only whether the path exists and names a regular file matters here. Size
//! and content are never grounds for refusing a document.

use std::fs;
use std::path::Path;

/// Reasons a backing document cannot be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFileError {
    NotFound,
    PermissionDenied,
    IsDirectory,
    IoError(String),
}

impl std::fmt::Display for DocumentFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DocumentFileError {}

/// Check that `path` names an existing regular file.
pub fn check_document_file(path: &Path) -> Result<(), DocumentFileError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DocumentFileError::NotFound,
        std::io::ErrorKind::PermissionDenied => DocumentFileError::PermissionDenied,
        _ => DocumentFileError::IoError(e.to_string()),
    })?;

    if metadata.is_dir() {
        return Err(DocumentFileError::IsDirectory);
    }

    Ok(())
}

/// File name component of `path`, for messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
