//! API error types for JIRA client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when interacting with the JIRA API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// JIRA answered with a non-success status.
    ///
    /// The body is kept verbatim so the user sees exactly what JIRA said.
    #[error("API error: {status} - {body}")]
    Status {
        /// The HTTP status returned.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// The HTTP status, if JIRA answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Check if the error means the credentials were rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Extract JIRA's error messages from the response body.
    ///
    /// JIRA returns JSON with `errorMessages` (a list) and `errors`
    /// (field → message). Returns an empty list when the body has neither.
    pub fn jira_messages(&self) -> Vec<String> {
        let ApiError::Status { body, .. } = self else {
            return Vec::new();
        };
        let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
            return Vec::new();
        };

        let mut messages: Vec<String> = json
            .get("errorMessages")
            .and_then(|m| m.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if let Some(errors) = json.get("errors").and_then(|e| e.as_object()) {
            messages.extend(errors.iter().map(|(field, message)| match message.as_str() {
                Some(text) => format!("{}: {}", field, text),
                None => format!("{}: {}", field, message),
            }));
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: StatusCode, body: &str) -> ApiError {
        ApiError::Status {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_status_error_display_is_verbatim() {
        let err = status_error(StatusCode::BAD_REQUEST, r#"{"errorMessages":["nope"]}"#);
        assert_eq!(
            err.to_string(),
            r#"API error: 400 Bad Request - {"errorMessages":["nope"]}"#
        );
    }

    #[test]
    fn test_status_accessor() {
        let err = status_error(StatusCode::NOT_FOUND, "");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(ApiError::InvalidUrl("x".to_string()).status(), None);
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(status_error(StatusCode::UNAUTHORIZED, "").is_unauthorized());
        assert!(status_error(StatusCode::FORBIDDEN, "").is_unauthorized());
        assert!(!status_error(StatusCode::NOT_FOUND, "").is_unauthorized());
    }

    #[test]
    fn test_jira_messages_from_error_messages() {
        let err = status_error(
            StatusCode::NOT_FOUND,
            r#"{"errorMessages":["Issue does not exist or you do not have permission to see it."],"errors":{}}"#,
        );
        assert_eq!(
            err.jira_messages(),
            vec!["Issue does not exist or you do not have permission to see it.".to_string()]
        );
    }

    #[test]
    fn test_jira_messages_from_field_errors() {
        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"errorMessages":[],"errors":{"timeLogged":"You must indicate the time spent working."}}"#,
        );
        assert_eq!(
            err.jira_messages(),
            vec!["timeLogged: You must indicate the time spent working.".to_string()]
        );
    }

    #[test]
    fn test_jira_messages_non_json_body() {
        let err = status_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert!(err.jira_messages().is_empty());
    }
}
