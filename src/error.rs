//! Centralized error types for jira-worklog.
//!
//! This module provides a unified error hierarchy for the application with
//! user-friendly error messages. All error types use `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

use crate::api::error::ApiError;
use crate::config::{ConfigError, ENV_API_TOKEN, ENV_EMAIL};
use crate::duration::DurationError;
use crate::worklog::WorklogError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The time expression could not be parsed.
    #[error("Error parsing time input: {0}")]
    Duration(#[from] DurationError),

    /// The worklog request was invalid.
    #[error("{0}")]
    Worklog(#[from] WorklogError),

    /// Reading from the terminal failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO errors (file system, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    ///
    /// JIRA responses are passed through verbatim; everything else gets a
    /// plain-language summary.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::CreateDirError(_) => {
                    "Could not create configuration directory. Check file permissions.".to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::WriteError(_) => {
                    "Could not save configuration. Please check file permissions.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::SerializeError(_) => {
                    "Could not save configuration. Internal error.".to_string()
                }
                ConfigError::EnvFileError(msg) => format!("Could not load .env file: {}", msg),
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
                ConfigError::MissingCredentials => format!(
                    "No JIRA credentials found. {} and {} must be set.",
                    ENV_EMAIL, ENV_API_TOKEN
                ),
            },
            AppError::Api(e) => match e {
                ApiError::Status { .. } => e.to_string(),
                ApiError::Network(err) => format!("Error making request: {}", err),
                ApiError::InvalidUrl(url) => format!("Invalid JIRA URL in configuration: {}", url),
                ApiError::Encode(err) => format!("Error marshaling JSON: {}", err),
            },
            AppError::Duration(_) | AppError::Worklog(_) | AppError::Other(_) => self.to_string(),
            AppError::Prompt(_) => "Could not read input from the terminal.".to_string(),
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::MissingCredentials) => Some(
                "To configure, run: worklog configure (or set JIRA_EMAIL and JIRA_API_TOKEN, e.g. in a .env file)",
            ),
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Run 'worklog configure' to rewrite the configuration file.")
            }
            AppError::Api(e) if e.is_unauthorized() => {
                Some("Check your API token at https://id.atlassian.com/manage-profile/security/api-tokens")
            }
            AppError::Api(ApiError::Network(_)) | AppError::Api(ApiError::InvalidUrl(_)) => {
                Some("Check your internet connection and JIRA base URL.")
            }
            AppError::Duration(_) => Some("Use a format like 1h 30m, 90m, 3h or 45s."),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));
    }

    #[test]
    fn test_app_error_from_duration_error() {
        let app_err: AppError = DurationError::Empty.into();
        assert_eq!(
            app_err.to_string(),
            "Error parsing time input: time input is empty"
        );
    }

    #[test]
    fn test_user_message_passes_api_body_through() {
        let err = AppError::Api(ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"errors":{"timeLogged":"bad"}}"#.to_string(),
        });
        let msg = err.user_message();
        assert!(msg.contains("400 Bad Request"));
        assert!(msg.contains(r#"{"errors":{"timeLogged":"bad"}}"#));
    }

    #[test]
    fn test_user_message_missing_credentials() {
        let err = AppError::Config(ConfigError::MissingCredentials);
        let msg = err.user_message();
        assert!(msg.contains("JIRA_EMAIL"));
        assert!(msg.contains("JIRA_API_TOKEN"));
    }

    #[test]
    fn test_user_message_config_validation() {
        let err = AppError::Config(ConfigError::ValidationError("bad email".to_string()));
        assert!(err.user_message().contains("bad email"));
    }

    #[test]
    fn test_suggested_action_missing_credentials() {
        let err = AppError::Config(ConfigError::MissingCredentials);
        assert!(err.suggested_action().unwrap().contains("worklog configure"));
    }

    #[test]
    fn test_suggested_action_unauthorized() {
        let err = AppError::Api(ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        });
        assert!(err.suggested_action().unwrap().contains("api-tokens"));
    }

    #[test]
    fn test_suggested_action_not_found_is_none() {
        let err = AppError::Api(ApiError::Status {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        });
        assert!(err.suggested_action().is_none());
    }

    #[test]
    fn test_other_error() {
        let err = AppError::other("something went wrong");
        assert!(matches!(err, AppError::Other(_)));
        assert_eq!(err.user_message(), "something went wrong");
    }
}
