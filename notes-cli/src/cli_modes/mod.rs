mod notes_cli;
mod viewer_cli;

pub use notes_cli::{NotesCli, NotesCommand};
pub use viewer_cli::{ViewerCli, ViewerCommand};

use crate::{BaseCli, Renderer};
use anyhow::{Context, Result};
use notes_core::NoteStore;

/// Loads the store for this invocation and reports what the load found.
fn open_store(base: &BaseCli, renderer: &Renderer) -> Result<NoteStore> {
    let mut store = base.store()?;
    let report = store
        .load()
        .with_context(|| format!("loading notes from {}", store.path().display()))?;
    if report.missing_file {
        renderer.print_info("No existing notes found. Starting fresh...");
    }
    renderer.print_skipped_lines(&report.skipped);
    Ok(store)
}
