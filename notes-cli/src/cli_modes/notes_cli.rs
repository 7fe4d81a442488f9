use super::open_store;
use crate::{BaseCli, CliModeResult, DateArgs, Prompt, RenderOptions, Renderer};
use anyhow::Result;
use clap::{Parser, Subcommand};
use notes_core::{
    DeleteOutcome, EditOutcome, NoteStore, StoreError,
    parse_input::parse_date_time_input,
    validate::{validate_date, validate_time},
};
use std::io::{BufRead, Write};

/// notes-app: add, edit and delete notes in the notes file
#[derive(Parser, Debug)]
#[command(name = "notes-app", version, about)]
pub struct NotesCli {
    #[command(flatten)]
    pub base: BaseCli,
    #[command(subcommand)]
    pub command: NotesCommand,
}

#[derive(Subcommand, Debug)]
pub enum NotesCommand {
    /// Add a note; date, time and text are asked for interactively
    Add,
    /// Replace the text of the first note on a date
    Edit(DateArgs),
    /// Delete the first note on a date
    Delete(DateArgs),
}

impl NotesCli {
    /// Runs the command reading answers from `input` and echoing prompts to `output`.
    pub fn run<R: BufRead, W: Write>(&self, prompt: &mut Prompt<R, W>) -> Result<CliModeResult> {
        let renderer = Renderer::new(Some(RenderOptions {
            use_color: self.base.use_color(),
        }));

        let result = match &self.command {
            NotesCommand::Add => {
                let mut store = open_store(&self.base, &renderer)?;
                add_mode(&mut store, &renderer, prompt)?
            }
            NotesCommand::Edit(args) => match checked_date(&renderer, args) {
                Some((day, month, year)) => {
                    let mut store = open_store(&self.base, &renderer)?;
                    edit_mode(&mut store, &renderer, prompt, day, month, year)?
                }
                None => CliModeResult::Rejected,
            },
            NotesCommand::Delete(args) => match checked_date(&renderer, args) {
                Some((day, month, year)) => {
                    let mut store = open_store(&self.base, &renderer)?;
                    delete_mode(&mut store, &renderer, day, month, year)?
                }
                None => CliModeResult::Rejected,
            },
        };

        if self.base.pause && result == CliModeResult::Finish {
            prompt.pause()?;
        }
        Ok(result)
    }
}

/// Parses and validates a `DD MM YYYY` argument triple, reporting problems.
fn checked_date(renderer: &Renderer, args: &DateArgs) -> Option<(i32, i32, i32)> {
    let Some((day, month, year)) = args.parse() else {
        renderer.print_error("Please enter: DD MM YYYY");
        return None;
    };
    if !validate_date(day, month, year) {
        renderer.print_error("Invalid date!");
        return None;
    }
    Some((day, month, year))
}

/// Reports store errors caused by the user; anything else is returned.
fn report_rejection(renderer: &Renderer, err: StoreError) -> Result<CliModeResult> {
    if !err.is_rejection() {
        return Err(err.into());
    }
    renderer.print_error(&err.to_string());
    Ok(CliModeResult::Finish)
}

fn add_mode<R: BufRead, W: Write>(
    store: &mut NoteStore,
    renderer: &Renderer,
    prompt: &mut Prompt<R, W>,
) -> Result<CliModeResult> {
    if store.is_full() {
        renderer.print_error("Note storage full!");
        return Ok(CliModeResult::Finish);
    }

    let line = prompt.ask(&renderer.prompt_label("Enter date and time (DD MM YYYY HH MM): "))?;
    let Some(input) = parse_date_time_input(&line) else {
        renderer.print_error("Invalid input format! Please enter exactly 5 numbers.");
        return Ok(CliModeResult::Finish);
    };
    if !validate_date(input.day, input.month, input.year) || !validate_time(input.hour, input.minute)
    {
        renderer.print_error("Invalid date or time.");
        return Ok(CliModeResult::Finish);
    }

    let text = prompt.ask(&renderer.prompt_label("Enter note: "))?;
    match store.add(
        input.day,
        input.month,
        input.year,
        input.hour,
        input.minute,
        &text,
    ) {
        Ok(_) => {
            renderer.print_success("Note added successfully!");
            Ok(CliModeResult::Finish)
        }
        Err(err) => report_rejection(renderer, err),
    }
}

fn edit_mode<R: BufRead, W: Write>(
    store: &mut NoteStore,
    renderer: &Renderer,
    prompt: &mut Prompt<R, W>,
    day: i32,
    month: i32,
    year: i32,
) -> Result<CliModeResult> {
    match store.find_first(day, month, year)? {
        Some(note) => renderer.print_old_note(note),
        None => {
            renderer.print_info("No note found for given date.");
            return Ok(CliModeResult::Finish);
        }
    }

    let text = prompt.ask(&renderer.prompt_label("Enter new note: "))?;
    match store.edit(day, month, year, &text) {
        Ok(EditOutcome::Updated { .. }) => renderer.print_success("Note updated!"),
        Ok(EditOutcome::NotFound) => renderer.print_info("No note found for given date."),
        Err(err) => return report_rejection(renderer, err),
    }
    Ok(CliModeResult::Finish)
}

fn delete_mode(
    store: &mut NoteStore,
    renderer: &Renderer,
    day: i32,
    month: i32,
    year: i32,
) -> Result<CliModeResult> {
    match store.delete(day, month, year) {
        Ok(DeleteOutcome::Deleted(_)) => renderer.print_success("Note deleted."),
        Ok(DeleteOutcome::NotFound) => renderer.print_info("Note not found."),
        Err(err) => return report_rejection(renderer, err),
    }
    Ok(CliModeResult::Finish)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorMode;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::tempdir;

    fn mk_cli(file: &Path, command: NotesCommand) -> NotesCli {
        NotesCli {
            base: BaseCli {
                file: Some(file.to_path_buf()),
                color: ColorMode::Never,
                pause: false,
                verbose: 0,
            },
            command,
        }
    }

    fn mk_pausing_cli(file: &Path, command: NotesCommand) -> NotesCli {
        let mut cli = mk_cli(file, command);
        cli.base.pause = true;
        cli
    }

    fn date(day: &str, month: &str, year: &str) -> DateArgs {
        DateArgs {
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
        }
    }

    fn run(cli: &NotesCli, input: &str) -> (CliModeResult, String) {
        let mut out = Vec::new();
        let mut prompt = Prompt::new(Cursor::new(input.to_string()), &mut out);
        let result = cli.run(&mut prompt).unwrap();
        drop(prompt);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn add_reads_date_line_then_text() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        let cli = mk_cli(&file, NotesCommand::Add);

        let (result, prompts) = run(&cli, "05 03 2024 07 09\nDentist\n");
        assert_eq!(result, CliModeResult::Finish);
        assert_eq!(
            prompts,
            "Enter date and time (DD MM YYYY HH MM): Enter note: "
        );
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "05 03 2024 07 09|Dentist\n"
        );
    }

    #[test]
    fn add_with_bad_input_never_asks_for_text() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        let cli = mk_cli(&file, NotesCommand::Add);

        for line in ["05 03 2024 07", "31 04 2024 10 00", "01 01 2024 10 60"] {
            let (result, prompts) = run(&cli, &format!("{line}\nignored\n"));
            assert_eq!(result, CliModeResult::Finish);
            assert!(!prompts.contains("Enter note"));
        }
        assert!(!file.exists());
    }

    #[test]
    fn edit_prompts_only_when_a_note_matches() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        fs::write(&file, "02 02 2024 09 00|old\n").unwrap();

        let miss = mk_cli(&file, NotesCommand::Edit(date("03", "02", "2024")));
        let (result, prompts) = run(&miss, "unused\n");
        assert_eq!(result, CliModeResult::Finish);
        assert_eq!(prompts, "");

        let hit = mk_cli(&file, NotesCommand::Edit(date("02", "02", "2024")));
        let (_, prompts) = run(&hit, "new\n");
        assert_eq!(prompts, "Enter new note: ");
        assert_eq!(fs::read_to_string(&file).unwrap(), "02 02 2024 09 00|new\n");
    }

    #[test]
    fn invalid_date_arguments_are_rejected() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        let cli = mk_cli(&file, NotesCommand::Delete(date("31", "04", "2020")));
        assert_eq!(run(&cli, "").0, CliModeResult::Rejected);
        let cli = mk_cli(&file, NotesCommand::Edit(date("aa", "04", "2020")));
        assert_eq!(run(&cli, "").0, CliModeResult::Rejected);
    }

    #[test]
    fn delete_removes_first_match() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        fs::write(&file, "02 02 2024 09 00|a\n02 02 2024 10 00|b\n").unwrap();
        let cli = mk_cli(&file, NotesCommand::Delete(date("2", "2", "2024")));
        assert_eq!(run(&cli, "").0, CliModeResult::Finish);
        assert_eq!(fs::read_to_string(&file).unwrap(), "02 02 2024 10 00|b\n");
    }

    #[test]
    fn pause_waits_for_enter_after_the_report() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        fs::write(&file, "02 02 2024 09 00|a\n").unwrap();

        let cli = mk_pausing_cli(&file, NotesCommand::Delete(date("02", "02", "2024")));
        let (result, prompts) = run(&cli, "\n");
        assert_eq!(result, CliModeResult::Finish);
        assert_eq!(prompts, "Press Enter to continue...");
        assert_eq!(fs::read_to_string(&file).unwrap(), "");

        let cli = mk_pausing_cli(&file, NotesCommand::Edit(date("02", "02", "2024")));
        let (_, prompts) = run(&cli, "");
        assert_eq!(prompts, "Press Enter to continue...");
    }

    #[test]
    fn pause_is_skipped_for_rejected_arguments() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        let cli = mk_pausing_cli(&file, NotesCommand::Delete(date("31", "04", "2020")));
        let (result, prompts) = run(&cli, "\n");
        assert_eq!(result, CliModeResult::Rejected);
        assert_eq!(prompts, "");
    }
}
