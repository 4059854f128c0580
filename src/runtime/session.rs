//! Interactive command loop
//!
//! Prints the current text and a menu, reads one command per line, runs the
//! matching engine operation and reports its outcome. Reads from any
//! `BufRead` and writes to any `Write` so the loop can be driven in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::editor::{Editor, SaveStatus};
use crate::model::EditError;
use crate::storage::Storage;

const MENU: &str = "Choose an option:
a - Add text
u - Undo
r - Redo
d - Delete text from position
e - Delete all text
q - Quit";

/// A menu choice, selected by the first non-blank character of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Append,
    Undo,
    Redo,
    Delete,
    Clear,
    Quit,
    Invalid,
}

impl Choice {
    pub fn parse(line: &str) -> Self {
        match line.trim_start().chars().next() {
            Some('a') => Self::Append,
            Some('u') => Self::Undo,
            Some('r') => Self::Redo,
            Some('d') => Self::Delete,
            Some('e') => Self::Clear,
            Some('q') => Self::Quit,
            _ => Self::Invalid,
        }
    }
}

/// The interactive loop around one editor
pub struct Session<S: Storage, R, W> {
    editor: Editor<S>,
    input: R,
    output: W,
}

impl<S: Storage, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(editor: Editor<S>, input: R, output: W) -> Self {
        Self {
            editor,
            input,
            output,
        }
    }

    pub fn editor(&self) -> &Editor<S> {
        &self.editor
    }

    /// Give back the editor and output, e.g. to inspect them after a run
    pub fn into_parts(self) -> (Editor<S>, W) {
        (self.editor, self.output)
    }

    /// Run until `q` or end of input.
    ///
    /// Editing problems are reported to the output and never end the loop;
    /// only failing to read input or write output is an error.
    pub fn run(&mut self) -> Result<()> {
        if let Some(e) = self.editor.load_error() {
            let message = e.user_message();
            writeln!(self.output, "Error loading file: {}", message)
                .context("failed to write to output")?;
        }

        loop {
            write!(
                self.output,
                "\nCurrent text: {}\n{}\nEnter your choice: ",
                self.editor.text(),
                MENU
            )
            .context("failed to write menu")?;
            self.output.flush().context("failed to flush output")?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("End of input, leaving session");
                self.say("Quitting...")?;
                return Ok(());
            };

            let choice = Choice::parse(&line);
            tracing::trace!(?choice, "menu choice");

            let result = match choice {
                Choice::Append => {
                    self.prompt("Enter text to add: ")?;
                    let Some(text) = self.read_line()? else {
                        tracing::debug!("End of input while reading text, leaving session");
                        self.say("Quitting...")?;
                        return Ok(());
                    };
                    self.editor.append(&text)
                }
                Choice::Undo => self.editor.undo(),
                Choice::Redo => self.editor.redo(),
                Choice::Delete => {
                    let Some(start) = self.read_number("Enter start position to delete: ")?
                    else {
                        continue;
                    };
                    let Some(length) = self.read_number("Enter length of text to delete: ")?
                    else {
                        continue;
                    };
                    self.editor.delete_range(start, length)
                }
                Choice::Clear => self.editor.clear(),
                Choice::Quit => {
                    self.say("Quitting...")?;
                    return Ok(());
                }
                Choice::Invalid => {
                    self.say("Invalid choice. Try again.")?;
                    continue;
                }
            };

            self.report(result)?;
        }
    }

    fn report(&mut self, result: Result<SaveStatus, EditError>) -> Result<()> {
        match result {
            Ok(SaveStatus::Saved) => Ok(()),
            Ok(SaveStatus::Failed(e)) => {
                self.say(&format!("Error saving file: {}", e.user_message()))
            }
            Ok(SaveStatus::RolledBack(e)) => {
                self.say(&format!("Error saving file: {}", e.user_message()))?;
                self.say("The change was not applied.")
            }
            Err(e) => self.say(e.user_message()),
        }
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).context("failed to write to output")
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text).context("failed to write prompt")?;
        self.output.flush().context("failed to flush output")
    }

    /// Next input line without its line ending, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if n == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prompt for an integer; reports and returns `None` if the reply isn't one
    fn read_number(&mut self, prompt: &str) -> Result<Option<i64>> {
        self.prompt(prompt)?;
        let line = self.read_line()?.unwrap_or_default();
        match line.trim().parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                self.say("Invalid number.")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::io::Cursor;

    fn run_script(storage: MemoryStorage, script: &str) -> (Editor<MemoryStorage>, String) {
        let editor = Editor::open(storage);
        let mut session = Session::new(editor, Cursor::new(script.to_string()), Vec::new());
        session.run().unwrap();
        let (editor, out) = session.into_parts();
        (editor, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("a"), Choice::Append);
        assert_eq!(Choice::parse("  undo"), Choice::Undo);
        assert_eq!(Choice::parse("r"), Choice::Redo);
        assert_eq!(Choice::parse("d"), Choice::Delete);
        assert_eq!(Choice::parse("e"), Choice::Clear);
        assert_eq!(Choice::parse("quit"), Choice::Quit);
        assert_eq!(Choice::parse("x"), Choice::Invalid);
        assert_eq!(Choice::parse(""), Choice::Invalid);
        assert_eq!(Choice::parse("A"), Choice::Invalid);
    }

    #[test]
    fn test_append_keeps_spaces_in_text() {
        let (editor, _) = run_script(MemoryStorage::new(), "a\n hello world \nq\n");
        assert_eq!(editor.text(), " hello world ");
    }

    #[test]
    fn test_crlf_input() {
        let (editor, _) = run_script(MemoryStorage::new(), "a\r\nabc\r\nq\r\n");
        assert_eq!(editor.text(), "abc");
    }

    #[test]
    fn test_invalid_number_skips_delete() {
        let (editor, out) = run_script(MemoryStorage::with_content("abc"), "d\nx\nq\n");
        assert_eq!(editor.text(), "abc");
        assert_eq!(editor.undo_depth(), 0);
        assert!(out.contains("Invalid number."));
    }

    #[test]
    fn test_end_of_input_after_append_choice_does_not_edit() {
        let (editor, out) = run_script(MemoryStorage::with_content("kept"), "a\n");
        assert_eq!(editor.text(), "kept");
        assert_eq!(editor.undo_depth(), 0);
        assert_eq!(editor.storage().save_count(), 0);
        assert!(out.ends_with("Enter text to add: Quitting...\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (_, out) = run_script(MemoryStorage::new(), "");
        assert!(out.ends_with("Quitting...\n"));
    }

    #[test]
    fn test_load_error_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let editor = Editor::open(crate::storage::FileStorage::new(dir.path()));
        let mut session = Session::new(editor, Cursor::new("q\n"), Vec::new());
        session.run().unwrap();
        let (editor, out) = session.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error loading file: "));
        assert_eq!(editor.text(), "");
    }
}
