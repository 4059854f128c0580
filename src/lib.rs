//! jotpad - an interactive plain-text editor that saves after every change
//!
//! The document engine keeps a text buffer with linear undo/redo history of
//! whole-buffer snapshots, and writes the whole buffer to a single backing
//! file after every successful operation. State transitions follow the Elm
//! Architecture: `update` changes the model and returns a `Cmd`, which the
//! engine executes against its `Storage`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod storage;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{EditorConfig, SaveFailurePolicy};
pub use messages::{DocumentMsg, Msg};
pub use model::{Document, EditError};
pub use runtime::{Editor, SaveStatus, Session};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
