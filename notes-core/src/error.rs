use std::path::PathBuf;
use thiserror::Error;

/// Failures of store operations.
///
/// A date with no matching note is not an error but an
/// ordinary outcome (see [`crate::EditOutcome`] and [`crate::DeleteOutcome`]).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Note storage full! ({max} notes)")]
    StorageFull { max: usize },

    #[error("Invalid date: {day:02}-{month:02}-{year:04}")]
    InvalidDate { day: i32, month: i32, year: i32 },

    #[error("Invalid time: {hour:02}:{minute:02}")]
    InvalidTime { hour: i32, minute: i32 },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// `true` when the operation was refused because of the request itself
    /// (bad date or time, full store) rather than the environment.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, StoreError::Io { .. })
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
