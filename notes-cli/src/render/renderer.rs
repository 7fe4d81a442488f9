use super::theme::Palette;
use notes_core::{
    LineError, Note,
    format_utils::{format_display_date, format_display_time},
};
use termimad::crossterm::style::{Color, Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.opts.use_color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn print_info(&self, message: &str) {
        println!("{}", self.paint(message, Palette::WARNING));
    }

    pub fn print_success(&self, message: &str) {
        println!("{}", self.paint(message, Palette::SUCCESS));
    }

    pub fn print_error(&self, message: &str) {
        println!("{}", self.paint(message, Palette::ERROR));
    }

    pub fn print_header(&self, message: &str) {
        println!("{}", self.paint(message, Palette::HEADER));
    }

    /// Label for an interactive prompt, styled but not printed.
    pub fn prompt_label(&self, label: &str) -> String {
        self.paint(label, Palette::PROMPT)
    }

    /// `DD-MM-YYYY HH:MM - text`
    pub fn print_note_line(&self, note: &Note) {
        let stamp = format!(
            "{} {}",
            format_display_date(note.day(), note.month(), note.year()),
            format_display_time(note)
        );
        println!("{} - {}", self.paint(&stamp, Palette::NOTE_DATE), note.text);
    }

    /// `HH:MM - text`, used under a per-date header.
    pub fn print_note_time_line(&self, note: &Note) {
        let time = format_display_time(note);
        println!("{} - {}", self.paint(&time, Palette::NOTE_DATE), note.text);
    }

    pub fn print_old_note(&self, note: &Note) {
        println!("{}{}", self.paint("Old Note: ", Palette::HEADER), note.text);
    }

    pub fn print_notes(&self, notes: &[Note]) {
        if notes.is_empty() {
            self.print_info("No notes available.");
            return;
        }
        self.print_header("All Notes:");
        for note in notes {
            self.print_note_line(note);
        }
    }

    pub fn print_notes_on(&self, day: i32, month: i32, year: i32, notes: &[&Note]) {
        self.print_header(&format!(
            "Notes for {}:",
            format_display_date(day, month, year)
        ));
        if notes.is_empty() {
            self.print_info("No notes found for this date.");
            return;
        }
        for note in notes {
            self.print_note_time_line(note);
        }
    }

    /// Lists lines of the notes file that were skipped while loading.
    pub fn print_skipped_lines(&self, skipped: &[LineError]) {
        for line in self.skipped_lines_report(skipped) {
            println!("{line}");
        }
    }

    /// Report lines for [`Renderer::print_skipped_lines`]. File content is shown verbatim.
    fn skipped_lines_report(&self, skipped: &[LineError]) -> Vec<String> {
        if skipped.is_empty() {
            return Vec::new();
        }
        let mut lines = vec![self.paint("Skipped unreadable lines:", Palette::WARNING)];
        for error in skipped {
            let label = format!("  line {}:", error.line);
            lines.push(format!("{} {}", self.paint(&label, Palette::WARNING), error.content));
        }
        lines
    }
}
