use anyhow::Result;
use notes_cli::{CliModeResult, NotesCli, Prompt, init_logging, parse_args};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match parse_args::<NotesCli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    init_logging(cli.base.verbose);

    match run(&cli) {
        Ok(result) => result.into(),
        Err(e) => {
            println!("notes-app: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &NotesCli) -> Result<CliModeResult> {
    tracing::debug!(command = ?cli.command, "running");
    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    cli.run(&mut prompt)
}
