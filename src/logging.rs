//! Logging configuration using the tracing ecosystem.
//!
//! Logs go to a daily rotating file so that stdout carries nothing but the
//! JIRA response. Passing `-v` mirrors them to stderr as well.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Initialize the logging system.
///
/// Sets up tracing with:
/// - Daily rotating file appender in the user's local data directory
/// - Log level configuration via `RUST_LOG` environment variable
/// - An optional stderr layer when `verbose` is non-zero
///
/// # Log Directory
///
/// Logs are stored in the platform-specific local data directory:
/// - Linux: `~/.local/share/jira-worklog/logs/`
/// - macOS: `~/Library/Application Support/jira-worklog/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\jira-worklog\logs\`
///
/// # Errors
///
/// Returns an error if:
/// - The log directory cannot be determined or created
/// - The tracing subscriber cannot be set
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "worklog.log");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = (verbose > 0).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(stderr_layer)
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "jira-worklog starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

/// Filter used when `RUST_LOG` is not set.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "jira_worklog=info,warn",
        1 => "jira_worklog=debug,warn",
        _ => "jira_worklog=trace,info",
    }
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("jira-worklog").join("logs"))
}
