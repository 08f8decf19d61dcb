//! JIRA API client implementation.
//!
//! This module provides the client for the JIRA REST API v3 worklog
//! endpoint. Each call issues exactly one request; failures are returned
//! to the caller as-is with no retry.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::{header, Client, Response};
use tracing::{debug, info, instrument, warn};

use super::auth::Auth;
use super::error::{ApiError, Result};
use super::types::Worklog;
use crate::config::Credentials;
use crate::worklog::WorklogRequest;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API root appended when the configured URL points at the site itself.
const DEFAULT_API_PATH: &str = "/rest/api/3";

/// The JIRA API client.
#[derive(Debug)]
pub struct JiraClient {
    /// The HTTP client.
    client: Client,
    /// The REST API root, e.g. `https://company.atlassian.net/rest/api/3`.
    base_url: String,
    /// Authentication credentials.
    auth: Auth,
}

impl JiraClient {
    /// Create a new JIRA client from resolved credentials.
    ///
    /// Does not contact the server.
    #[instrument(skip(credentials), fields(email = %credentials.email))]
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_credentials(&credentials.base_url, &credentials.email, &credentials.token)
    }

    /// Create a new JIRA client with explicit credentials.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The JIRA site or REST API root
    /// * `email` - The user's email address
    /// * `token` - The API token
    pub fn with_credentials(base_url: &str, email: &str, token: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let auth = Auth::new(email, token);
        let client = Self::build_http_client()?;

        debug!(base_url = %base_url, "JIRA client created");
        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    /// Build the HTTP client with appropriate settings.
    ///
    /// Redirects are not followed; a 3xx answer comes back as `ApiError::Status`.
    fn build_http_client() -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .redirect(Policy::none())
            .user_agent(concat!("jira-worklog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Network)
    }

    /// The worklog endpoint for an issue.
    pub fn worklog_url(&self, issue_key: &str) -> String {
        format!(
            "{}/issue/{}/worklog",
            self.base_url,
            urlencoding::encode(issue_key)
        )
    }

    /// Add a worklog to an issue.
    ///
    /// Calls `POST /rest/api/3/issue/{issueKey}/worklog` once and returns the
    /// raw response body on success.
    ///
    /// # Errors
    ///
    /// - `ApiError::Status` with the verbatim body for any non-2xx answer
    /// - `ApiError::Network` if the request could not be completed
    #[instrument(skip(self, request), fields(issue_key = %request.issue_key()))]
    pub async fn add_worklog(&self, request: &WorklogRequest) -> Result<String> {
        let url = self.worklog_url(request.issue_key());
        let body = serde_json::to_vec(&request.to_entry())?;

        debug!(
            time_spent_seconds = request.time_spent_seconds(),
            "Posting worklog"
        );

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, self.auth.header_value())
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let text = Self::handle_response(response).await?;

        match serde_json::from_str::<Worklog>(&text) {
            Ok(worklog) => info!(%worklog, "Worklog created"),
            Err(_) => info!("Worklog created"),
        }
        Ok(text)
    }

    /// Read the body and turn non-success statuses into errors.
    async fn handle_response(response: Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            let err = ApiError::Status { status, body };
            warn!(
                status = %status,
                messages = ?err.jira_messages(),
                "JIRA rejected the request"
            );
            Err(err)
        }
    }
}

/// Normalize the base URL to a REST API root.
///
/// Trailing slashes are removed and `/rest/api/3` is appended when the URL
/// names the site rather than an API version.
fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');

    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(ApiError::InvalidUrl(format!(
            "'{}' must start with http:// or https://",
            url
        )));
    }

    // Warn if not HTTPS (but don't enforce for local testing)
    if !url.starts_with("https://") && !is_local(url) {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", url);
    }

    if url.contains("/rest/api/") {
        Ok(url.to_string())
    } else {
        Ok(format!("{}{}", url, DEFAULT_API_PATH))
    }
}

fn is_local(url: &str) -> bool {
    url.contains("://localhost") || url.contains("://127.0.0.1")
}
