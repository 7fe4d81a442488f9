use crate::note::Note;

/// Character written between the numeric fields and the note text.
pub const SEPARATOR: char = '|';

/// Renders one backing-file line: `DD MM YYYY HH MM|text`.
pub fn format_note_line(note: &Note) -> String {
    format!(
        "{:02} {:02} {:04} {:02} {:02}{SEPARATOR}{}",
        note.day(),
        note.month(),
        note.year(),
        note.hour(),
        note.minute(),
        note.text
    )
}

/// Renders the whole backing file, one note per line.
pub fn format_notes(notes: &[Note]) -> String {
    let mut content = String::new();
    for note in notes {
        content.push_str(&format_note_line(note));
        content.push('\n');
    }
    content
}

/// `DD-MM-YYYY`, as shown to the user.
pub fn format_display_date(day: i32, month: i32, year: i32) -> String {
    format!("{day:02}-{month:02}-{year:04}")
}

/// `HH:MM`, as shown to the user.
pub fn format_display_time(note: &Note) -> String {
    note.time.format("%H:%M").to_string()
}
