//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Choosing the backing document
//! - An alternate config file
//! - Rolling back edits whose save fails
//! - Turning off the file log

use clap::Parser;
use std::path::PathBuf;

use crate::config::{EditorConfig, SaveFailurePolicy};

/// An interactive plain-text editor that saves after every change
#[derive(Parser, Debug)]
#[command(name = "jotpad", version, about = "An interactive, always-saved text editor")]
pub struct CliArgs {
    /// Backing document (overrides `document_path` from the config file)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Read configuration from PATH instead of the default location
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Undo an edit in memory when saving it fails
    #[arg(long)]
    pub rollback_on_save_error: bool,

    /// Log to the console only
    #[arg(long)]
    pub no_log_file: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub document_path: PathBuf,
    pub save_failure: SaveFailurePolicy,
    pub file_logging: bool,
}

impl CliArgs {
    /// Read the config file these arguments point at
    pub fn load_editor_config(&self) -> EditorConfig {
        match &self.config {
            Some(path) => EditorConfig::load_from(path),
            None => EditorConfig::load(),
        }
    }

    /// Merge arguments over `config`; arguments win
    pub fn into_config(self, config: EditorConfig) -> StartupConfig {
        let save_failure = if self.rollback_on_save_error {
            SaveFailurePolicy::Rollback
        } else {
            config.save_failure
        };

        StartupConfig {
            document_path: self.file.unwrap_or(config.document_path),
            save_failure,
            file_logging: !self.no_log_file,
        }
    }
}
