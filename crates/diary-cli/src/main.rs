//! Diary CLI - a personal diary of dated Markdown entries
//!
//! This is the command-line front end for Diary. It binds flags to the
//! entry service in `diary-core` and reports the outcome.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;

use clap::{CommandFactory, Parser};

use crate::app::load_config;
use crate::cli::{Cli, Commands};
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();

    // An unreadable config only costs the configured log level here; the
    // command itself reports the config error.
    let config_level = load_config()
        .ok()
        .flatten()
        .and_then(|config| config.log.level);
    logging::init(config_level.as_deref());

    if let Err(err) = run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => commands::init::handle_init(cli, args),
        Some(Commands::Add(args)) => commands::entries::handle_add(cli, args),
        Some(Commands::Edit(args)) => commands::entries::handle_edit(cli, args),
        Some(Commands::Show(args)) => commands::entries::handle_show(cli, args),
        Some(Commands::List(args)) => commands::entries::handle_list(cli, args),
        Some(Commands::On(args)) => commands::calendar::handle_on(cli, args),
        Some(Commands::Calendar(args)) => commands::calendar::handle_calendar(cli, args),
        Some(Commands::Delete(args)) => commands::entries::handle_delete(cli, args),
        Some(Commands::Completions(args)) => commands::misc::handle_completions(args.shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
