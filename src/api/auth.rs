//! Authentication handling for JIRA API.
//!
//! JIRA Cloud accepts Basic Auth built from the account email and an API
//! token. The token is encoded once and never kept in plain form.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Authentication credentials for JIRA.
#[derive(Clone)]
pub struct Auth {
    /// The user's email address.
    email: String,
    /// The Base64-encoded authorization header value.
    auth_header: String,
}

impl Auth {
    /// Create new authentication credentials from email and token.
    ///
    /// The token is immediately encoded and the raw token is not stored.
    pub fn new(email: &str, token: &str) -> Self {
        let auth_header = build_auth_header(email, token);
        Self {
            email: email.to_string(),
            auth_header,
        }
    }

    /// Get the authorization header value for HTTP requests.
    ///
    /// Returns the complete "Basic ..." header value.
    pub fn header_value(&self) -> &str {
        &self.auth_header
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth")
            .field("email", &self.email)
            .field("auth_header", &"Basic <redacted>")
            .finish()
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "email:token" in Base64 and prepends "Basic ".
fn build_auth_header(email: &str, token: &str) -> String {
    let credentials = format!("{}:{}", email, token);
    let encoded = BASE64.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_auth_header() {
        let header = build_auth_header("user@example.com", "api_token_here");
        assert!(header.starts_with("Basic "));

        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = BASE64.decode(encoded).unwrap();
        let decoded_str = String::from_utf8(decoded).unwrap();
        assert_eq!(decoded_str, "user@example.com:api_token_here");
    }

    #[test]
    fn test_auth_new() {
        let auth = Auth::new("user@example.com", "secret_token");
        assert_eq!(auth.header_value(), build_auth_header("user@example.com", "secret_token"));
    }

    #[test]
    fn test_auth_does_not_expose_token() {
        let auth = Auth::new("user@example.com", "secret_token");
        let debug_output = format!("{:?}", auth);

        assert!(!debug_output.contains("secret_token"));
        assert!(!debug_output.contains(auth.header_value()));
        assert!(debug_output.contains("user@example.com"));
    }
}
