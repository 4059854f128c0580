//! Utility modules

pub mod file_validation;

pub use file_validation::{check_document_file, filename_for_display, DocumentFileError};
