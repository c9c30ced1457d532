use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use diary_core::VERSION;

/// Diary - a personal diary of dated Markdown entries kept in one JSON file
#[derive(Parser)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the JSON store file
    #[arg(short, long, global = true, env = "DIARY_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store file will live
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry title
    #[arg(long)]
    pub title: Option<String>,

    /// Entry date (YYYY-MM-DD or ISO-8601); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Entry content in Markdown, or `-` to read stdin (overrides --content-file and piped stdin)
    #[arg(long)]
    pub content: Option<String>,

    /// Read entry content from a Markdown or text file
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New date (YYYY-MM-DD or ISO-8601)
    #[arg(long)]
    pub date: Option<String>,

    /// New content in Markdown, or `-` to read stdin
    #[arg(long)]
    pub content: Option<String>,

    /// Read new content from a Markdown or text file
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `on` command
#[derive(Args)]
pub struct OnArgs {
    /// Calendar day (YYYY-MM-DD)
    #[arg(value_name = "DAY")]
    pub day: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `calendar` command
#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show (YYYY-MM); defaults to the current month
    #[arg(long)]
    pub month: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and an empty store
    Init(InitArgs),

    /// Add a new entry
    Add(AddArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// List all entries, newest date first
    List(ListArgs),

    /// List entries for one calendar day
    On(OnArgs),

    /// Show which days of a month have entries
    Calendar(CalendarArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
