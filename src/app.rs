//! Command dispatch.
//!
//! Each command reads what it needs, does one thing and writes its result to
//! the given output. Nothing here keeps state between calls.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::api::{ApiError, JiraClient};
use crate::cli::{AddArgs, Cli, Command};
use crate::config;
use crate::duration::{format_duration, parse_duration};
use crate::error::Result;
use crate::prompt::{self, Prompter, TerminalPrompter};
use crate::worklog::WorklogRequest;

/// Run the parsed command line against the terminal.
pub async fn run(cli: Cli) -> Result<()> {
    let mut prompter = TerminalPrompter::new();
    let mut stdout = std::io::stdout();
    let command = cli.command.unwrap_or(Command::Add(AddArgs::default()));

    match command {
        Command::Add(args) => {
            let path = config_path(cli.config)?;
            add(&args, &path, &mut prompter, &mut stdout).await
        }
        Command::Configure => {
            let path = config_path(cli.config)?;
            configure(&path, &mut prompter, &mut stdout)
        }
        Command::ParseTime { expr } => parse_time(&expr, &mut stdout),
    }
}

fn config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(config::default_config_path()?),
    }
}

/// Post one worklog.
///
/// Credentials are resolved before anything is asked so a missing
/// configuration fails fast.
#[instrument(skip_all)]
pub async fn add<P, W>(args: &AddArgs, config_path: &Path, prompter: &mut P, out: &mut W) -> Result<()>
where
    P: Prompter + ?Sized,
    W: Write,
{
    let credentials = config::resolve(config_path)?;
    let client = JiraClient::new(&credentials)?;

    let input = prompt::worklog_input(
        prompter,
        args.issue.clone(),
        args.comment.clone(),
        args.time.clone(),
    )?;
    let seconds = parse_duration(&input.time_spent)?;
    let request = WorklogRequest::new(&input.issue_key, &input.comment, seconds)?;
    debug!(issue_key = %request.issue_key(), seconds, "Worklog request built");

    if args.dry_run {
        let body = serde_json::to_string_pretty(&request.to_entry()).map_err(ApiError::from)?;
        writeln!(out, "POST {}", client.worklog_url(request.issue_key()))?;
        writeln!(out, "{}", body)?;
        return Ok(());
    }

    let response = client.add_worklog(&request).await?;
    writeln!(out, "Worklog added successfully: {}", response)?;
    Ok(())
}

/// Ask for credentials and save them to the config file.
#[instrument(skip_all)]
pub fn configure<P, W>(config_path: &Path, prompter: &mut P, out: &mut W) -> Result<()>
where
    P: Prompter + ?Sized,
    W: Write,
{
    let credentials = prompt::credentials(prompter)?;
    config::save(config_path, &credentials)?;

    info!(email = %credentials.email, "Credentials configured");
    writeln!(out, "Configuration saved successfully!")?;
    writeln!(out, "Configuration file location: {}", config_path.display())?;
    Ok(())
}

/// Print the seconds a time expression stands for.
pub fn parse_time<W: Write>(expr: &str, out: &mut W) -> Result<()> {
    let seconds = parse_duration(expr)?;
    writeln!(out, "{} ({})", seconds, format_duration(seconds))?;
    Ok(())
}
