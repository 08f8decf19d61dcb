//! jira-worklog - log time against JIRA issues from the command line.
//!
//! Reads credentials, asks for an issue key, a comment and the time spent,
//! and posts a single worklog to the JIRA REST API.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod worklog;
