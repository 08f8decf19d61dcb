//! JIRA API request and response types.
//!
//! These types model the JIRA REST API v3 worklog endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Node type of the document root.
pub const DOC_TYPE: &str = "doc";
/// Node type of a paragraph block.
pub const PARAGRAPH_TYPE: &str = "paragraph";
/// Node type of a text run.
pub const TEXT_TYPE: &str = "text";
/// ADF schema version JIRA accepts.
pub const DOC_VERSION: u32 = 1;

/// Atlassian Document Format (ADF) content.
///
/// JIRA uses ADF for rich text fields like descriptions and comments.
/// Worklog comments only need the `doc → paragraph → text` subset, so the
/// nodes are typed rather than kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlassianDoc {
    /// The document type (always "doc" for root documents).
    #[serde(rename = "type")]
    pub doc_type: String,
    /// The document version.
    pub version: u32,
    /// The block nodes within the document.
    #[serde(default)]
    pub content: Vec<BlockNode>,
}

/// A block-level ADF node such as a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub content: Vec<TextNode>,
}

/// An inline text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub text: String,
}

impl AtlassianDoc {
    /// Wrap plain text in a single-paragraph document.
    pub fn from_text(text: &str) -> Self {
        Self {
            doc_type: DOC_TYPE.to_string(),
            version: DOC_VERSION,
            content: vec![BlockNode {
                node_type: PARAGRAPH_TYPE.to_string(),
                content: vec![TextNode {
                    node_type: TEXT_TYPE.to_string(),
                    text: text.to_string(),
                }],
            }],
        }
    }
}

/// Request body for `POST /rest/api/3/issue/{issueKey}/worklog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogEntry {
    /// The worklog comment; omitted when there is nothing to say.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<AtlassianDoc>,
    /// Time spent in seconds.
    pub time_spent_seconds: u64,
}

/// A worklog as returned by JIRA after creation.
///
/// Only the fields worth logging are modelled; the raw body is what gets
/// shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    /// The worklog ID.
    pub id: String,
    /// The numeric ID of the issue the worklog belongs to.
    #[serde(default)]
    pub issue_id: Option<String>,
    /// JIRA's own rendering of the time spent (e.g. "1h 30m").
    #[serde(default)]
    pub time_spent: Option<String>,
    /// Time spent in seconds.
    #[serde(default)]
    pub time_spent_seconds: Option<u64>,
}

impl fmt::Display for Worklog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.time_spent {
            Some(spent) => write!(f, "worklog {} ({})", self.id, spent),
            None => write!(f, "worklog {}", self.id),
        }
    }
}
