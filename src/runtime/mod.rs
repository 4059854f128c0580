//! Runtime: the document engine and the interactive session driving it

pub mod editor;
pub mod session;

pub use editor::{Editor, SaveStatus};
pub use session::{Choice, Session};
