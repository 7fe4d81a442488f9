use termimad::crossterm::style::Color;

/// Terminal palette for notes output.
pub struct Palette;

impl Palette {
    pub const ERROR: Color = Color::Red;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const NOTE_DATE: Color = Color::Blue;
    pub const HEADER: Color = Color::Magenta;
    pub const PROMPT: Color = Color::Cyan;
}
