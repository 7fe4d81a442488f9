use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// Default cap on the number of characters kept from a note's text.
pub const DEFAULT_MAX_TEXT_LEN: usize = 499;

/// A single date/time-stamped text record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub text: String,
}

impl Note {
    pub fn new(date: NaiveDate, time: NaiveTime, text: impl Into<String>) -> Self {
        Self {
            date,
            time,
            text: text.into(),
        }
    }

    pub fn day(&self) -> i32 {
        self.date.day() as i32
    }

    pub fn month(&self) -> i32 {
        self.date.month() as i32
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn hour(&self) -> i32 {
        self.time.hour() as i32
    }

    pub fn minute(&self) -> i32 {
        self.time.minute() as i32
    }

    /// Date-keyed match on `(day, month, year)`.
    pub fn is_on(&self, day: i32, month: i32, year: i32) -> bool {
        self.day() == day && self.month() == month && self.year() == year
    }
}

/// Prepares free text for storage.
///
/// Line breaks are folded into spaces so the note stays on one line of the
/// backing file, then the text is cut to `max_len` characters. Cutting counts
/// chars, not bytes, so multi-byte characters are never split.
pub fn cap_text(text: &str, max_len: usize) -> String {
    text.trim_end_matches(['\r', '\n'])
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(max_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_plain_fields() {
        let note = Note::new(
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveTime::from_hms_opt(8, 5, 0).unwrap(),
            "leap day",
        );
        assert_eq!(
            (note.day(), note.month(), note.year(), note.hour(), note.minute()),
            (29, 2, 2024, 8, 5)
        );
        assert!(note.is_on(29, 2, 2024));
        assert!(!note.is_on(28, 2, 2024));
    }

    #[test]
    fn cap_text_truncates_long_text() {
        let long = "a".repeat(600);
        let capped = cap_text(&long, DEFAULT_MAX_TEXT_LEN);
        assert_eq!(capped.chars().count(), 499);
    }

    #[test]
    fn cap_text_keeps_short_text_verbatim() {
        assert_eq!(cap_text("  spaced out  ", 499), "  spaced out  ");
        assert_eq!(cap_text("", 499), "");
    }

    #[test]
    fn cap_text_folds_line_breaks() {
        assert_eq!(cap_text("one\ntwo\r\n", 499), "one two");
    }

    #[test]
    fn cap_text_counts_chars_not_bytes() {
        let capped = cap_text("ñandú", 3);
        assert_eq!(capped, "ñan");
    }
}
