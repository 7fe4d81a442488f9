mod cli_modes;
mod common;
mod render;

pub use cli_modes::{NotesCli, NotesCommand, ViewerCli, ViewerCommand};
pub use common::{BaseCli, CliModeResult, DateArgs, Prompt, init_logging, parse_args};
pub use render::{ColorMode, RenderOptions, Renderer};
