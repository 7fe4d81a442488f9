//! The `NoteStore`: an ordered, capped list of notes mirrored to a flat file.
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::format_utils::format_notes;
use crate::note::{Note, cap_text};
use crate::parse_notes::{LineError, parse_file_content};
use crate::validate::{to_date, to_time, validate_date};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Holds every note in insertion order together with the backing file they are flushed to.
///
/// Nothing touches the disk until [`NoteStore::load`] or a mutating operation is called.
/// The file is not locked: two processes working on the same file race.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    max_notes: usize,
    max_text_len: usize,
    notes: Vec<Note>,
}

/// What [`NoteStore::load`] found on disk.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// The backing file did not exist; the store starts empty.
    pub missing_file: bool,
    pub loaded: usize,
    /// Lines that could not be parsed. They are dropped from the file on the next save.
    pub skipped: Vec<LineError>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Updated { previous: String, note: Note },
    NotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Note),
    NotFound,
}

impl NoteStore {
    /// Creates an empty store bound to `path`, with default limits.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_config(&Config {
            notes_file: path.into(),
            ..Config::default()
        })
    }

    /// Creates an empty store using the file and limits from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            path: config.notes_file.clone(),
            max_notes: config.max_notes,
            max_text_len: config.max_text_len,
            notes: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.notes.len() >= self.max_notes
    }

    /// All notes, in storage order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Replaces the in-memory list with the content of the backing file.
    ///
    /// A missing file leaves the store empty and is reported, not returned as an error.
    /// Malformed lines are skipped; at most `max_notes` notes are kept.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.notes.clear();
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no backing file yet");
                return Ok(LoadReport {
                    missing_file: true,
                    ..LoadReport::default()
                });
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let parsed = parse_file_content(&content, self.max_notes);
        for error in &parsed.errors {
            tracing::warn!(path = %self.path.display(), "skipping malformed note, {error}");
        }
        self.notes = parsed.notes;
        tracing::debug!(
            path = %self.path.display(),
            loaded = self.notes.len(),
            skipped = parsed.errors.len(),
            "loaded notes"
        );

        Ok(LoadReport {
            missing_file: false,
            loaded: self.notes.len(),
            skipped: parsed.errors,
        })
    }

    /// Appends a note and persists the store.
    ///
    /// Capacity is checked before the date and time. `text` is capped to the
    /// configured length.
    pub fn add(
        &mut self,
        day: i32,
        month: i32,
        year: i32,
        hour: i32,
        minute: i32,
        text: &str,
    ) -> Result<Note> {
        if self.is_full() {
            return Err(StoreError::StorageFull {
                max: self.max_notes,
            });
        }
        let date = to_date(day, month, year).ok_or(StoreError::InvalidDate { day, month, year })?;
        let time = to_time(hour, minute).ok_or(StoreError::InvalidTime { hour, minute })?;

        let note = Note::new(date, time, cap_text(text, self.max_text_len));
        self.notes.push(note.clone());
        if let Err(err) = self.save() {
            self.notes.pop();
            return Err(err);
        }
        tracing::info!(date = %note.date, time = %note.time, "note added");
        Ok(note)
    }

    /// Every note filed under the given date, in storage order.
    ///
    /// An invalid date is an error and no scan happens; no match is an empty `Vec`.
    pub fn notes_on(&self, day: i32, month: i32, year: i32) -> Result<Vec<&Note>> {
        Self::check_date(day, month, year)?;
        Ok(self
            .notes
            .iter()
            .filter(|n| n.is_on(day, month, year))
            .collect())
    }

    /// First note filed under the given date.
    pub fn find_first(&self, day: i32, month: i32, year: i32) -> Result<Option<&Note>> {
        Self::check_date(day, month, year)?;
        Ok(self.notes.iter().find(|n| n.is_on(day, month, year)))
    }

    /// Replaces the text of the first note on the given date and persists the store.
    pub fn edit(&mut self, day: i32, month: i32, year: i32, new_text: &str) -> Result<EditOutcome> {
        let Some(idx) = self.position(day, month, year)? else {
            return Ok(EditOutcome::NotFound);
        };

        let capped = cap_text(new_text, self.max_text_len);
        let previous = std::mem::replace(&mut self.notes[idx].text, capped);
        if let Err(err) = self.save() {
            self.notes[idx].text = previous;
            return Err(err);
        }
        tracing::info!(date = %self.notes[idx].date, "note updated");
        Ok(EditOutcome::Updated {
            previous,
            note: self.notes[idx].clone(),
        })
    }

    /// Removes the first note on the given date and persists the store.
    pub fn delete(&mut self, day: i32, month: i32, year: i32) -> Result<DeleteOutcome> {
        let Some(idx) = self.position(day, month, year)? else {
            return Ok(DeleteOutcome::NotFound);
        };

        let removed = self.notes.remove(idx);
        if let Err(err) = self.save() {
            self.notes.insert(idx, removed);
            return Err(err);
        }
        tracing::info!(date = %removed.date, "note deleted");
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Rewrites the whole backing file.
    ///
    /// The content goes to a temporary file next to the real file which is then
    /// renamed over it, so a failed write never leaves a truncated file. A symlinked
    /// backing file is followed, and the permissions of an existing file are kept.
    pub fn save(&self) -> Result<()> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(io_err)?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(io_err)?;
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(io_err)?;
        }
        tmp.write_all(format_notes(&self.notes).as_bytes())
            .map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&target).map_err(|e| io_err(e.error))?;

        tracing::debug!(path = %target.display(), notes = self.notes.len(), "saved notes");
        Ok(())
    }

    fn position(&self, day: i32, month: i32, year: i32) -> Result<Option<usize>> {
        Self::check_date(day, month, year)?;
        Ok(self.notes.iter().position(|n| n.is_on(day, month, year)))
    }

    fn check_date(day: i32, month: i32, year: i32) -> Result<()> {
        if validate_date(day, month, year) {
            Ok(())
        } else {
            Err(StoreError::InvalidDate { day, month, year })
        }
    }
}
