//! Token providers.
//!
//! The sender only needs two capabilities from its authentication context: a
//! valid bearer token on demand and the account identifier the token belongs
//! to. `TokenProvider` captures that seam so the send flow can be exercised
//! against a stub.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::auth::token::{AccessToken, AuthError};
use crate::config::schema::AuthConfig;

/// Authentication capability required by the send and list operations.
///
/// `ensure_valid_token` is idempotent and safe to call before every request.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return a token guaranteed valid for the immediate next API call,
    /// refreshing first if the cached one is absent or near expiry.
    async fn ensure_valid_token(&self) -> Result<AccessToken, AuthError>;

    /// Account identifier API paths are resolved under.
    fn account_id(&self) -> &str;
}

/// Wire shape of the token endpoint's success response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Provider that exchanges client credentials at an OAuth token endpoint and
/// caches the result until it nears expiry.
///
/// The cache sits behind a `tokio::sync::Mutex`, so concurrent sends sharing
/// one provider refresh at most once at a time.
pub struct OauthTokenProvider {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    account_id: String,
    refresh_buffer: Duration,
    cached: Mutex<Option<AccessToken>>,
}

impl OauthTokenProvider {
    pub fn new(config: &AuthConfig, account_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            account_id: account_id.into(),
            refresh_buffer: Duration::from_secs(config.refresh_buffer_secs),
            cached: Mutex::new(None),
        }
    }

    async fn request_token(&self) -> Result<AccessToken, AuthError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| AuthError::Malformed(e.to_string()))?;
        tracing::info!(expires_in_secs = parsed.expires_in, "access token refreshed");
        Ok(AccessToken::new(
            parsed.access_token,
            Duration::from_secs(parsed.expires_in),
        ))
    }
}

#[async_trait]
impl TokenProvider for OauthTokenProvider {
    async fn ensure_valid_token(&self) -> Result<AccessToken, AuthError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if !token.is_expired(self.refresh_buffer) {
                return Ok(token.clone());
            }
            tracing::debug!("cached access token near expiry, refreshing");
        }

        let token = self.request_token().await?;
        *cached = Some(token.clone());
        Ok(token)
    }

    fn account_id(&self) -> &str {
        &self.account_id
    }
}

/// Provider backed by a pre-issued token. Never refreshes; once the token
/// expires every call fails with `AuthError::Expired`.
pub struct StaticTokenProvider {
    token: AccessToken,
    account_id: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>, account_id: impl Into<String>, ttl: Duration) -> Self {
        Self {
            token: AccessToken::new(token, ttl),
            account_id: account_id.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn ensure_valid_token(&self) -> Result<AccessToken, AuthError> {
        if self.token.is_expired(Duration::ZERO) {
            return Err(AuthError::Expired);
        }
        Ok(self.token.clone())
    }

    fn account_id(&self) -> &str {
        &self.account_id
    }
}
