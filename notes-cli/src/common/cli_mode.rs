use std::process::ExitCode;

/// How a command finished, as far as the exit code is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliModeResult {
    /// Ran to completion. Not-found and rejected interactive input end up here too.
    Finish,
    /// Bad command-line usage or an invalid date argument.
    Rejected,
}

impl From<CliModeResult> for ExitCode {
    fn from(result: CliModeResult) -> Self {
        match result {
            CliModeResult::Finish => ExitCode::SUCCESS,
            CliModeResult::Rejected => ExitCode::from(1),
        }
    }
}
