//! Parses the backing file into [`Note`]s.
//!
//! Each line reads five integers (day, month, year, hour, minute), one
//! separator character, and the rest of the line verbatim as text.
use crate::note::Note;
use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static NOTE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*([+-]?[0-9]+)\s+([+-]?[0-9]+)\s+([+-]?[0-9]+)\s+([+-]?[0-9]+)\s+([+-]?[0-9]+)(?:[^0-9](.*))?$",
    )
    .expect("note line regex is valid")
});

/// A line of the backing file that could not be turned into a note.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: could not parse {content:?}")]
pub struct LineError {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
}

/// Notes read from a file plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct ParseResult {
    pub notes: Vec<Note>,
    pub errors: Vec<LineError>,
}

/// Parses a single backing-file line.
///
/// Returns `None` when the line does not start with five integers or when
/// they do not describe a real calendar date and clock time. The year range
/// accepted by [`crate::validate::validate_date`] is not re-checked here.
pub fn parse_note_line(line: &str) -> Option<Note> {
    let caps = NOTE_LINE.captures(line)?;
    let field = |i: usize| caps.get(i)?.as_str().parse::<i64>().ok();

    let day = u32::try_from(field(1)?).ok()?;
    let month = u32::try_from(field(2)?).ok()?;
    let year = i32::try_from(field(3)?).ok()?;
    let hour = u32::try_from(field(4)?).ok()?;
    let minute = u32::try_from(field(5)?).ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let text = caps.get(6).map_or("", |m| m.as_str());

    Some(Note::new(date, time, text))
}

/// Parses the full content of a backing file.
///
/// Works on raw bytes so that one line with invalid UTF-8 only costs that line.
/// Blank lines are ignored. A malformed line is recorded in
/// [`ParseResult::errors`] and parsing carries on with the next line.
/// Parsing stops once `max_notes` notes have been collected.
pub fn parse_file_content(content: impl AsRef<[u8]>, max_notes: usize) -> ParseResult {
    let mut result = ParseResult::default();
    for (idx, raw) in content.as_ref().split(|b| *b == b'\n').enumerate() {
        if result.notes.len() >= max_notes {
            break;
        }
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let note = match std::str::from_utf8(raw) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => parse_note_line(line),
            Err(_) => None,
        };
        match note {
            Some(note) => result.notes.push(note),
            None => result.errors.push(LineError {
                line: idx + 1,
                content: String::from_utf8_lossy(raw).into_owned(),
            }),
        }
    }
    result
}
