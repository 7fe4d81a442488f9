use super::open_store;
use crate::{BaseCli, CliModeResult, DateArgs, Prompt, RenderOptions, Renderer};
use anyhow::Result;
use clap::{Parser, Subcommand};
use notes_core::validate::validate_date;
use std::io;

/// note-viewer: read notes from the notes file
#[derive(Parser, Debug)]
#[command(name = "note-viewer", version, about)]
pub struct ViewerCli {
    #[command(flatten)]
    pub base: BaseCli,
    #[command(subcommand)]
    pub command: ViewerCommand,
}

#[derive(Subcommand, Debug)]
pub enum ViewerCommand {
    /// Print every note
    View,
    /// Print the notes filed under one date
    ViewByDate(DateArgs),
}

impl ViewerCli {
    pub fn run(&self) -> Result<CliModeResult> {
        let renderer = Renderer::new(Some(RenderOptions {
            use_color: self.base.use_color(),
        }));

        let result = match &self.command {
            ViewerCommand::View => {
                let store = open_store(&self.base, &renderer)?;
                renderer.print_notes(store.notes());
                CliModeResult::Finish
            }
            ViewerCommand::ViewByDate(args) => self.view_by_date(&renderer, args)?,
        };

        if self.base.pause && result == CliModeResult::Finish {
            Prompt::new(io::stdin().lock(), io::stdout()).pause()?;
        }
        Ok(result)
    }

    fn view_by_date(&self, renderer: &Renderer, args: &DateArgs) -> Result<CliModeResult> {
        let Some((day, month, year)) = args.parse() else {
            renderer.print_error("Please enter: DD MM YYYY");
            return Ok(CliModeResult::Rejected);
        };
        if !validate_date(day, month, year) {
            renderer.print_error("Invalid date format.");
            return Ok(CliModeResult::Rejected);
        }

        let store = open_store(&self.base, renderer)?;
        let notes = store.notes_on(day, month, year)?;
        renderer.print_notes_on(day, month, year, &notes);
        Ok(CliModeResult::Finish)
    }
}
