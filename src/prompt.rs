//! Interactive terminal prompts.
//!
//! Prompting sits behind the [`Prompter`] trait so the command flows can be
//! driven by scripted answers in tests.

use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::config::Credentials;
use crate::error::Result;

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Ask for a line of text. Leading and trailing whitespace is dropped.
    fn text(&mut self, prompt: &str, allow_empty: bool) -> Result<String>;

    /// Ask for a secret without echoing it.
    fn secret(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal using `dialoguer`.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter using the colorful theme.
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn secret(&mut self, prompt: &str) -> Result<String> {
        let value = Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()?;
        Ok(value.trim().to_string())
    }
}

/// Raw answers for a worklog, before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorklogInput {
    pub issue_key: String,
    pub comment: String,
    pub time_spent: String,
}

/// Collect worklog fields, asking only for those not already given.
pub fn worklog_input<P: Prompter + ?Sized>(
    prompter: &mut P,
    issue_key: Option<String>,
    comment: Option<String>,
    time_spent: Option<String>,
) -> Result<WorklogInput> {
    let issue_key = match issue_key {
        Some(key) => key,
        None => prompter.text("Jira issue key (e.g., MEET-1)", false)?,
    };
    let comment = match comment {
        Some(text) => text,
        None => prompter.text("Comment", true)?,
    };
    let time_spent = match time_spent {
        Some(time) => time,
        None => prompter.text("Time spent (e.g., 1h 30m, 90m, 3h, 45s)", false)?,
    };

    Ok(WorklogInput {
        issue_key,
        comment,
        time_spent,
    })
}

/// Ask for the account details saved by `worklog configure`.
///
/// An empty base URL keeps the default.
pub fn credentials<P: Prompter + ?Sized>(prompter: &mut P) -> Result<Credentials> {
    let email = prompter.text("Jira email", false)?;
    let token = prompter.secret("Jira API token")?;
    let base_url = prompter.text("Jira base URL (press Enter for default)", true)?;

    Ok(Credentials::new(&email, &token, Some(&base_url)))
}
