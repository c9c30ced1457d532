use diary_core::service::{DeleteOutcome, EntryForm, FormState};

use crate::app::open_service;
use crate::cli::{AddArgs, Cli, DeleteArgs, EditArgs, ListArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::{parse_output_format, read_entry_content, today_value, OutputFormat};
use crate::output::{entries_json, entry_json, print_entries, print_entry};

const NOT_FOUND_HINT: &str = "Hint: Run `diary list` to find entry IDs.";

pub fn handle_add(cli: &Cli, args: &AddArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;
    let content = read_entry_content(args.content.clone(), args.content_file.as_deref(), true)?;

    let form = EntryForm {
        title: args.title.clone(),
        content,
        date: Some(args.date.clone().unwrap_or_else(today_value)),
    };
    let state = service.create_entry(&form);
    report_saved(cli, state, "Added")
}

pub fn handle_edit(cli: &Cli, args: &EditArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;
    let existing = service
        .entry_by_id(&args.id)
        .ok_or_else(|| CliError::not_found("Entry not found", NOT_FOUND_HINT))?;

    let content = read_entry_content(args.content.clone(), args.content_file.as_deref(), false)?
        .or(existing.content);
    let form = EntryForm {
        title: Some(args.title.clone().unwrap_or(existing.title)),
        content,
        date: Some(
            args.date
                .clone()
                .unwrap_or_else(|| existing.date.to_rfc3339()),
        ),
    };
    let state = service.update_entry(&args.id, &form);
    report_saved(cli, state, "Edited")
}

pub fn handle_show(cli: &Cli, args: &ShowArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;
    let entry = service
        .entry_by_id(&args.id)
        .ok_or_else(|| CliError::not_found("Entry not found", NOT_FOUND_HINT))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry)?)?);
    } else {
        print_entry(&entry, cli.quiet);
    }
    Ok(())
}

pub fn handle_list(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let format = list_format(args.json, args.format.as_deref())?;
    let service = open_service(cli)?;
    let entries = service.all_entries();
    match format {
        None => println!("{}", serde_json::to_string_pretty(&entries_json(&entries)?)?),
        Some(format) => print_entries(&entries, format, cli.quiet),
    }
    Ok(())
}

pub fn handle_delete(cli: &Cli, args: &DeleteArgs) -> anyhow::Result<()> {
    let service = open_service(cli)?;
    match service.delete_entry(&args.id) {
        DeleteOutcome::Deleted => {
            if !cli.quiet {
                println!("Deleted entry {}", args.id);
            }
            Ok(())
        }
        DeleteOutcome::NotFound => {
            Err(CliError::not_found("Entry not found", NOT_FOUND_HINT).into())
        }
        DeleteOutcome::MissingId => Err(CliError::invalid_input("Entry ID is required").into()),
        DeleteOutcome::Failed => Err(anyhow::anyhow!("Server error while deleting the entry.")),
    }
}

/// `None` for JSON output, otherwise the requested or default text format.
pub(crate) fn list_format(
    json: bool,
    format: Option<&str>,
) -> anyhow::Result<Option<OutputFormat>> {
    let format = parse_output_format(format)?;
    if json {
        if format.is_some() {
            return Err(CliError::invalid_input("--format cannot be used with --json").into());
        }
        return Ok(None);
    }
    Ok(Some(format.unwrap_or(OutputFormat::Table)))
}

/// Turn a `FormState` into output or a typed error.
fn report_saved(cli: &Cli, state: FormState, verb: &str) -> anyhow::Result<()> {
    if state.success {
        let id = state.id.unwrap_or_default();
        if cli.quiet {
            println!("{}", id);
        } else {
            println!("{} entry {}", verb, id);
        }
        return Ok(());
    }

    if let Some(errors) = state.errors {
        return Err(CliError::validation(state.message, errors).into());
    }
    if state.is_not_found() {
        return Err(CliError::not_found(state.message, NOT_FOUND_HINT).into());
    }
    Err(anyhow::anyhow!(state.message))
}
