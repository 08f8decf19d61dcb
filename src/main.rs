//! worklog - post a JIRA worklog from the terminal.

use std::process::ExitCode;

use clap::Parser;
use jira_worklog::error::AppError;
use jira_worklog::{app, cli::Cli, config, logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so `.env` can supply JIRA_WORKLOG_CONFIG too.
    if let Err(e) = config::load_dotenv() {
        let e = AppError::from(e);
        eprintln!("Error: {}", e.user_message());
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match app::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            ExitCode::FAILURE
        }
    }
}
