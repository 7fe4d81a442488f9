use crate::Config;
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(notes_file: PathBuf) -> Config {
    Config {
        notes_file,
        max_notes: 50,
        max_text_len: 499,
    }
}
