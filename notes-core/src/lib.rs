pub mod config;
pub mod error;
pub mod format_utils;
pub mod note;
pub mod parse_input;
pub mod parse_notes;
pub mod store;
pub mod validate;


pub use config::Config;
pub use error::StoreError;
pub use note::Note;
pub use parse_notes::{LineError, ParseResult};
pub use store::{DeleteOutcome, EditOutcome, LoadReport, NoteStore};
