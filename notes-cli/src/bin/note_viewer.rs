use anyhow::Result;
use notes_cli::{CliModeResult, ViewerCli, init_logging, parse_args};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match parse_args::<ViewerCli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    init_logging(cli.base.verbose);

    match run(&cli) {
        Ok(result) => result.into(),
        Err(e) => {
            println!("note-viewer: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &ViewerCli) -> Result<CliModeResult> {
    tracing::debug!(command = ?cli.command, "running");
    cli.run()
}
