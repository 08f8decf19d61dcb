//! Worklog requests and payload building.

use thiserror::Error;

use crate::api::types::{AtlassianDoc, WorklogEntry};

/// Errors raised while assembling a worklog request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorklogError {
    /// No issue key was given.
    #[error("issue key cannot be empty")]
    EmptyIssueKey,

    /// The issue key contains whitespace.
    #[error("issue key '{0}' cannot contain whitespace")]
    InvalidIssueKey(String),
}

/// Result type for worklog operations.
pub type Result<T> = std::result::Result<T, WorklogError>;

/// A single worklog to be posted against an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogRequest {
    issue_key: String,
    comment: String,
    time_spent_seconds: u64,
}

impl WorklogRequest {
    /// Create a new request.
    ///
    /// The issue key and comment are trimmed. The key must be non-empty and
    /// free of whitespace; the comment may be empty.
    pub fn new(issue_key: &str, comment: &str, time_spent_seconds: u64) -> Result<Self> {
        let issue_key = issue_key.trim();
        if issue_key.is_empty() {
            return Err(WorklogError::EmptyIssueKey);
        }
        if issue_key.contains(char::is_whitespace) {
            return Err(WorklogError::InvalidIssueKey(issue_key.to_string()));
        }

        Ok(Self {
            issue_key: issue_key.to_string(),
            comment: comment.trim().to_string(),
            time_spent_seconds,
        })
    }

    /// The issue key (e.g., "PROJ-123").
    pub fn issue_key(&self) -> &str {
        &self.issue_key
    }

    /// The comment text.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Time spent in seconds.
    pub fn time_spent_seconds(&self) -> u64 {
        self.time_spent_seconds
    }

    /// Build the request body JIRA expects.
    ///
    /// JIRA rejects empty text nodes, so an empty comment leaves the
    /// `comment` field out.
    pub fn to_entry(&self) -> WorklogEntry {
        let comment = if self.comment.is_empty() {
            None
        } else {
            Some(AtlassianDoc::from_text(&self.comment))
        };

        WorklogEntry {
            comment,
            time_spent_seconds: self.time_spent_seconds,
        }
    }
}
