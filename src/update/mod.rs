//! Update functions for the Elm-style architecture
//!
//! All document state transformations flow through these functions. They
//! never touch storage; persistence is requested through the returned `Cmd`.

mod document;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{Document, EditError};

pub use document::update_document;

/// Main update function - dispatches to sub-handlers
pub fn update(doc: &mut Document, msg: Msg) -> Result<Cmd, EditError> {
    match msg {
        Msg::Document(m) => {
            let _span =
                tracing::debug_span!("update_document", msg = ?m, edit = m.is_edit()).entered();
            let result = update_document(doc, m);
            match &result {
                Ok(_) => tracing::debug!(
                    revision = doc.revision,
                    len = doc.len_chars(),
                    undo = doc.history.undo_count(),
                    redo = doc.history.redo_count(),
                    "document updated"
                ),
                Err(e) => tracing::debug!("document update refused: {}", e),
            }
            result
        }
    }
}
