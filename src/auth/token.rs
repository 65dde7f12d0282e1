//! Access-token type and expiry check.

use std::time::{Duration, SystemTime};

use thiserror::Error;

/// Errors raised while obtaining or validating a token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token endpoint could not be reached.
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Token endpoint answered with a non-success status.
    #[error("token endpoint returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Token endpoint answered success but the body was not a token.
    #[error("malformed token response: {0}")]
    Malformed(String),

    /// A pre-issued token is past its expiry and cannot be refreshed.
    #[error("static access token expired")]
    Expired,
}

/// A bearer token with its absolute expiry time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    expires_at: SystemTime,
}

impl AccessToken {
    /// A token valid for `ttl` from now.
    pub fn new(token: impl Into<String>, ttl: Duration) -> Self {
        Self {
            token: token.into(),
            expires_at: SystemTime::now() + ttl,
        }
    }

    /// The bearer secret for the Authorization header.
    pub fn secret(&self) -> &str {
        &self.token
    }

    /// True when the token expires within `buffer` from now. The buffer keeps
    /// a token from expiring between the check and the API call that uses it.
    pub fn is_expired(&self, buffer: Duration) -> bool {
        match self.expires_at.duration_since(SystemTime::now()) {
            Ok(remaining) => remaining <= buffer,
            Err(_) => true,
        }
    }
}
