use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-oriented interactive input.
///
/// Generic over the reader and writer so commands can be driven from tests.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` (no newline) and reads one line without its line ending.
    ///
    /// End of input yields an empty string.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}").context("writing prompt")?;
        self.output.flush().context("flushing prompt")?;

        let mut line = String::new();
        self.input.read_line(&mut line).context("reading input")?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Blocks until the user presses Enter.
    pub fn pause(&mut self) -> Result<()> {
        self.ask("Press Enter to continue...")?;
        Ok(())
    }
}
