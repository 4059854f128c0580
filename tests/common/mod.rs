//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;

use jotpad::runtime::{Editor, Session};
use jotpad::storage::{FileStorage, MemoryStorage};
use tempfile::TempDir;

/// Editor over in-memory storage holding `text`
pub fn test_editor(text: &str) -> Editor<MemoryStorage> {
    if text.is_empty() {
        Editor::open(MemoryStorage::new())
    } else {
        Editor::open(MemoryStorage::with_content(text))
    }
}

/// Temp dir plus a document path inside it (file not created)
pub fn temp_document() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.txt");
    (dir, path)
}

/// Editor over a real file
pub fn file_editor(path: &PathBuf) -> Editor<FileStorage> {
    Editor::open(FileStorage::new(path))
}

/// Run the interactive session over `script`, returning editor and output
pub fn run_session<S: jotpad::Storage>(editor: Editor<S>, script: &str) -> (Editor<S>, String) {
    let mut session = Session::new(editor, Cursor::new(script.to_string()), Vec::new());
    session.run().unwrap();
    let (editor, out) = session.into_parts();
    (editor, String::from_utf8(out).unwrap())
}

/// Every "Current text: ..." line printed by a session, in order
pub fn shown_texts(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("Current text: "))
        .map(str::to_string)
        .collect()
}
