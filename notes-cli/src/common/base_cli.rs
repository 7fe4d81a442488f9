use crate::render::ColorMode;
use anyhow::Result;
use clap::{ArgAction, Args, Parser};
use notes_core::{Config, NoteStore, parse_input::parse_date_args};
use std::path::PathBuf;
use std::process::ExitCode;

/// Options shared by every notes binary.
#[derive(Args, Debug, Clone)]
pub struct BaseCli {
    /// Notes file to work on. Defaults to `notes.txt` in the current directory.
    #[arg(long, global = true, env = "NOTES_FILE")]
    pub file: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Wait for Enter before exiting.
    #[arg(long, global = true)]
    pub pause: bool,
    /// More log output on stderr (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl BaseCli {
    pub fn use_color(&self) -> bool {
        self.color.enabled()
    }

    /// Resolves the config with the `--file` override applied.
    pub fn config(&self) -> Result<Config> {
        Config::load_with_override(self.file.clone())
    }

    /// Builds the store for this invocation. Nothing is read yet.
    pub fn store(&self) -> Result<NoteStore> {
        Ok(NoteStore::with_config(&self.config()?))
    }
}

/// `DD MM YYYY` positional arguments.
#[derive(Args, Debug, Clone)]
pub struct DateArgs {
    #[arg(value_name = "DD", allow_negative_numbers = true)]
    pub day: String,
    #[arg(value_name = "MM", allow_negative_numbers = true)]
    pub month: String,
    #[arg(value_name = "YYYY", allow_negative_numbers = true)]
    pub year: String,
}

impl DateArgs {
    pub fn parse(&self) -> Option<(i32, i32, i32)> {
        parse_date_args(&self.day, &self.month, &self.year)
    }
}

/// Parses the command line, printing usage problems on stdout.
///
/// Returns the exit code to use when parsing did not produce a command:
/// `0` after `--help`/`--version`, `1` for usage errors.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|err| {
        print!("{}", err.render());
        if err.use_stderr() {
            ExitCode::from(1)
        } else {
            ExitCode::SUCCESS
        }
    })
}
