//! JIRA account credentials.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://onestepsoftware.atlassian.net/rest/api/3";

/// Credentials for a JIRA instance.
///
/// Stored as JSON with the keys `email`, `token` and `base_url`. Every key
/// may be missing from a file; the environment can fill the gaps.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// The user's email address.
    #[serde(default)]
    pub email: String,

    /// The API token.
    #[serde(default)]
    pub token: String,

    /// The JIRA site or REST API root.
    ///
    /// Empty in a file means "use the default".
    #[serde(default)]
    pub base_url: String,
}

impl Credentials {
    /// Create credentials, falling back to the default base URL when
    /// `base_url` is absent or blank.
    pub fn new(email: &str, token: &str, base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        Self {
            email: email.trim().to_string(),
            token: token.trim().to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// Validate these credentials.
    ///
    /// Checks that:
    /// - The email is non-empty and looks like an email address
    /// - The token is non-empty
    /// - The base URL starts with `http://` or `https://`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` with details if validation fails.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() {
            return Err(ConfigError::ValidationError(
                "email cannot be empty".to_string(),
            ));
        }

        if !self.email.contains('@') {
            return Err(ConfigError::ValidationError(format!(
                "'{}' does not appear to be a valid email address",
                self.email
            )));
        }

        if self.token.is_empty() {
            return Err(ConfigError::ValidationError(
                "API token cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "base URL '{}' must start with http:// or https://",
                self.base_url
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
