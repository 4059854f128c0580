//! Document update handlers: edits and undo/redo

use ropey::Rope;

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{Document, EditError};

/// Apply a document message.
///
/// New edits snapshot the buffer, change it and drop the redo stack; undo and
/// redo swap snapshots between the stacks. On success the returned command
/// saves the new buffer. A refused message changes nothing.
pub fn update_document(doc: &mut Document, msg: DocumentMsg) -> Result<Cmd, EditError> {
    match msg {
        DocumentMsg::Append(text) => {
            doc.begin_edit();
            let end = doc.buffer.len_chars();
            doc.buffer.insert(end, &text);
        }

        DocumentMsg::DeleteRange { start, length } => {
            let range = doc.delete_range(start, length)?;
            doc.begin_edit();
            doc.buffer.remove(range);
        }

        DocumentMsg::Clear => {
            doc.begin_edit();
            doc.buffer = Rope::new();
        }

        DocumentMsg::Undo => {
            let current = doc.buffer.clone();
            doc.buffer = doc.history.undo(current).ok_or(EditError::NothingToUndo)?;
        }

        DocumentMsg::Redo => {
            let current = doc.buffer.clone();
            doc.buffer = doc.history.redo(current).ok_or(EditError::NothingToRedo)?;
        }
    }

    doc.touch();
    Ok(Cmd::save(doc.text()))
}
