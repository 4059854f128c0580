//! Editor model - the complete in-memory state of a document
//!
//! State types only; transitions live in `crate::update`.

pub mod document;
pub mod history;

pub use document::{Document, EditError};
pub use history::SnapshotHistory;
