//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No API key was supplied; the request was never sent.
    #[error("missing credential: ELEVENLABS_API_KEY is not set")]
    MissingCredential,

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with anything other than 200.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Agent configuration violates a local invariant.
    #[error("invalid agent config: {field} {reason}")]
    InvalidAgentConfig {
        /// Offending field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::MissingCredential)
            || matches!(self, Error::Api { status: 401 | 403, .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> Error {
        Error::Api {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_classification() {
        assert!(Error::MissingCredential.is_auth_error());
        assert!(api(401).is_auth_error());
        assert!(api(403).is_auth_error());
        assert!(!api(422).is_auth_error());
        assert!(api(429).is_rate_limited());
        assert!(api(503).is_server_error());
        assert!(!api(404).is_server_error());
    }

    #[test]
    fn test_api_error_display_keeps_body() {
        let err = Error::Api {
            status: 422,
            body: r#"{"detail":"bad voice"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"API error (422): {"detail":"bad voice"}"#);
    }
}
