mod base_cli;
mod cli_mode;
mod logging;
mod prompt;

pub use base_cli::{BaseCli, DateArgs, parse_args};
pub use cli_mode::CliModeResult;
pub use logging::init_logging;
pub use prompt::Prompt;
