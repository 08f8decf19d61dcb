//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::ENV_CONFIG_PATH;

/// Log time against JIRA issues.
///
/// Without a subcommand, prompts for an issue key, a comment and the time
/// spent, then posts the worklog.
#[derive(Debug, Parser)]
#[command(name = "worklog", version, about)]
pub struct Cli {
    /// Path to the JSON config file
    #[arg(long, global = true, value_name = "PATH", env = ENV_CONFIG_PATH)]
    pub config: Option<PathBuf>,

    /// Log to stderr as well as the log file (repeat for more detail)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a worklog entry (the default)
    Add(AddArgs),

    /// Configure JIRA credentials
    Configure,

    /// Show how a time expression is read, in seconds
    ParseTime {
        /// Time expression, e.g. "1h 30m"
        expr: String,
    },
}

/// Options for `worklog add`. Anything left out is prompted for.
#[derive(Debug, Clone, Default, Args)]
pub struct AddArgs {
    /// Issue key, e.g. MEET-1
    #[arg(short, long)]
    pub issue: Option<String>,

    /// Worklog comment
    #[arg(short, long)]
    pub comment: Option<String>,

    /// Time spent, e.g. "1h 30m", "90m" or "45"
    #[arg(short, long)]
    pub time: Option<String>,

    /// Print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}
