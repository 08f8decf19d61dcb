//! Configuration management for jira-worklog.
//!
//! Credentials come from, in increasing order of precedence: the built-in
//! default base URL, the JSON config file, a `.env` file and the process
//! environment.

mod credentials;
mod file;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

pub use credentials::{Credentials, DEFAULT_BASE_URL};
pub use file::{load_file, save};

/// Environment variable holding the account email.
pub const ENV_EMAIL: &str = "JIRA_EMAIL";
/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "JIRA_API_TOKEN";
/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "JIRA_BASE_URL";
/// Environment variable overriding the config file location.
pub const ENV_CONFIG_PATH: &str = "JIRA_WORKLOG_CONFIG";

/// Name of the application's config directory.
const APP_DIR: &str = "jira-worklog";
/// Name of the config file inside it.
const CONFIG_FILE: &str = "config.json";
/// Dotenv file read from the working directory.
const DOTENV_FILE: &str = ".env";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The config directory could not be created.
    #[error("could not create config directory: {0}")]
    CreateDirError(std::io::Error),

    /// The config file could not be read.
    #[error("could not read config file: {0}")]
    ReadError(std::io::Error),

    /// The config file could not be written.
    #[error("could not write config file: {0}")]
    WriteError(std::io::Error),

    /// The config file is not valid JSON.
    #[error("could not parse config file: {0}")]
    ParseError(serde_json::Error),

    /// The configuration could not be serialized.
    #[error("could not serialize config: {0}")]
    SerializeError(serde_json::Error),

    /// The `.env` file exists but could not be loaded.
    #[error("could not load .env file: {0}")]
    EnvFileError(String),

    /// A value failed validation.
    #[error("{0}")]
    ValidationError(String),

    /// Email or token were not found in any source.
    #[error("no credentials found: JIRA_EMAIL and JIRA_API_TOKEN must be set")]
    MissingCredentials,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The default config file location.
///
/// `~/.config/jira-worklog/config.json` on Linux.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Load `.env` from the working directory into the environment.
pub fn load_dotenv() -> Result<()> {
    load_dotenv_from(Path::new(DOTENV_FILE))
}

/// Load a `.env` file into the process environment.
///
/// Variables that are already set win. A missing file is not an error.
pub fn load_dotenv_from(path: &Path) -> Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::EnvFileError(e.to_string())),
    }
}

/// Resolve credentials from the config file and the process environment.
///
/// Call [`load_dotenv`] first if `.env` files should be honored.
pub fn resolve(path: &Path) -> Result<Credentials> {
    let from_file = load_file(path)?;
    if from_file.is_none() {
        debug!(path = %path.display(), "No config file");
    }
    resolve_with(from_file, |key| std::env::var(key).ok())
}

/// Layer environment values over the file values.
///
/// `lookup` reads a variable by name. Empty values count as unset.
pub fn resolve_with<F>(from_file: Option<Credentials>, lookup: F) -> Result<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let (mut email, mut token, mut base_url) = match from_file {
        Some(c) => (c.email, c.token, c.base_url),
        None => (String::new(), String::new(), String::new()),
    };

    if let Some(value) = env(ENV_EMAIL) {
        email = value;
    }
    if let Some(value) = env(ENV_API_TOKEN) {
        token = value;
    }
    if let Some(value) = env(ENV_BASE_URL) {
        base_url = value;
    }

    if email.trim().is_empty() || token.trim().is_empty() {
        return Err(ConfigError::MissingCredentials);
    }

    let credentials = Credentials::new(&email, &token, Some(&base_url));
    if let Err(e) = credentials.validate() {
        warn!("Invalid configuration: {}", e);
        return Err(e);
    }
    Ok(credentials)
}
