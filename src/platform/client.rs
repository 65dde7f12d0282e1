//! Envelope API client.
//!
//! One `reqwest::Client` wrapper per configured platform. No retries and no
//! local recovery: every failure propagates typed to the caller.

use std::time::Duration;

use uuid::Uuid;

use crate::auth::token::AccessToken;
use crate::config::schema::PlatformConfig;
use crate::envelope::types::EnvelopeRequest;
use crate::platform::types::{ApiError, EnvelopeCreated, EnvelopeList, PlatformErrorBody};

/// Client for the platform's account-scoped envelope endpoints.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
}

impl PlatformClient {
    /// Create a client for the configured platform.
    pub fn new(config: &PlatformConfig) -> Result<Self, ApiError> {
        let parsed: url::Url = config
            .base_url
            .parse()
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        tracing::debug!(base_url = %parsed, "platform client initialized");
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn envelopes_url(&self, account_id: &str) -> String {
        format!("{}/v2.1/accounts/{}/envelopes", self.base_url, account_id)
    }

    /// Create (and, when the request says `sent`, dispatch) an envelope.
    pub async fn create_envelope(
        &self,
        token: &AccessToken,
        account_id: &str,
        envelope: &EnvelopeRequest,
    ) -> Result<EnvelopeCreated, ApiError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, account_id, "submitting envelope");

        let response = self
            .http
            .post(self.envelopes_url(account_id))
            .bearer_auth(token.secret())
            .header("X-Request-Id", request_id.to_string())
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(platform_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// List envelopes previously sent from the account.
    pub async fn list_envelopes(
        &self,
        token: &AccessToken,
        account_id: &str,
    ) -> Result<EnvelopeList, ApiError> {
        let request_id = Uuid::new_v4();
        tracing::debug!(%request_id, account_id, "listing envelopes");

        let response = self
            .http
            .get(self.envelopes_url(account_id))
            .bearer_auth(token.secret())
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(platform_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Map a rejection into `ApiError::Platform`, keeping the structured body
/// when the platform sent one and falling back to the raw text otherwise.
fn platform_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<PlatformErrorBody>(body) {
        Ok(parsed) => ApiError::Platform {
            status,
            message: parsed.message.unwrap_or_else(|| body.to_string()),
            error_code: parsed.error_code,
        },
        Err(_) => ApiError::Platform {
            status,
            error_code: None,
            message: body.to_string(),
        },
    }
}
