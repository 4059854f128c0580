use anyhow::Result;
use clap::Parser;

use jotpad::cli::CliArgs;
use jotpad::runtime::{Editor, Session};
use jotpad::storage::FileStorage;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = args.load_editor_config();
    let startup = args.into_config(config);
    jotpad::tracing::init(startup.file_logging);
    tracing::info!(
        "Opening {} (save failure policy: {:?})",
        startup.document_path.display(),
        startup.save_failure
    );

    let editor = Editor::open(FileStorage::new(&startup.document_path))
        .with_save_failure_policy(startup.save_failure);

    let stdin = std::io::stdin();
    let mut session = Session::new(editor, stdin.lock(), std::io::stdout());

    // The process always exits 0; a broken terminal only ends the session.
    if let Err(e) = session.run() {
        tracing::error!("Session ended: {:#}", e);
    }

    Ok(())
}
