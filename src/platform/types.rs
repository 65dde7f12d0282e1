//! Platform response types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::envelope::types::EnvelopeStatus;

/// Errors from platform API calls.
///
/// `Platform` carries the structured error body the platform returned, so
/// callers can distinguish an API rejection (validation, quota, permission)
/// from a transport or decoding failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a platform response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Platform answered with a non-success status and (usually) a
    /// structured error body.
    #[error("platform rejected request with status {status}: {message}")]
    Platform {
        status: u16,
        /// Machine-readable code from the error body, when one was present.
        error_code: Option<String>,
        message: String,
    },

    /// Platform answered success but the body did not match the expected
    /// shape.
    #[error("failed to decode platform response: {0}")]
    Decode(String),

    /// The configured base URL could not be parsed.
    #[error("invalid platform base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Structured error body the platform attaches to rejections.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformErrorBody {
    pub error_code: Option<String>,
    pub message: Option<String>,
}

/// Success response of the envelope-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeCreated {
    /// Opaque platform-generated identifier.
    pub envelope_id: String,
    pub status: EnvelopeStatus,
    #[serde(default)]
    pub status_date_time: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Response of the envelope-listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvelopeList {
    #[serde(default)]
    pub envelopes: Vec<EnvelopeSummary>,
}

/// One previously sent envelope. Listing reports statuses beyond the two a
/// creation request can ask for, so status stays a plain string here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSummary {
    pub envelope_id: String,
    pub status: String,
    #[serde(default)]
    pub email_subject: Option<String>,
    #[serde(default)]
    pub sent_date_time: Option<String>,
}
