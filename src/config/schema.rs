//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML config
//! file. Defaults target the platform's demo sandbox layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SignflowConfig {
    /// Platform endpoint and account settings.
    pub platform: PlatformConfig,

    /// Token acquisition settings.
    pub auth: AuthConfig,

    /// Demo document sources and the signing-request subject.
    pub documents: DocumentsConfig,
}

/// Platform endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// REST API base URL (e.g. "https://demo.signing.example.com/restapi").
    pub base_url: String,

    /// Account the envelope endpoints are scoped under.
    pub account_id: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            base_url: "https://demo.signing.example.com/restapi".to_string(),
            account_id: String::new(),
            request_timeout_secs: 30,
        }
    }
}

/// Token acquisition configuration.
///
/// Either `static_token` (a pre-issued bearer token) or the client-credential
/// pair must be set.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// OAuth token endpoint URL.
    pub token_url: String,

    /// Integration key identifying this client.
    pub client_id: String,

    /// Secret paired with the integration key.
    pub client_secret: String,

    /// Pre-issued bearer token; skips the token endpoint entirely.
    pub static_token: Option<String>,

    /// Refresh this many seconds before the cached token expires.
    pub refresh_buffer_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_url: "https://account.signing.example.com/oauth/token".to_string(),
            client_id: String::new(),
            client_secret: String::new(),
            static_token: None,
            refresh_buffer_secs: 30,
        }
    }
}

/// Demo document sources.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Word-format demo file; must contain the "/sn1/" anchor text.
    pub docx_path: PathBuf,

    /// PDF demo file; must contain the "/sn1/" anchor text.
    pub pdf_path: PathBuf,

    /// Subject line of the signing-request email.
    pub email_subject: String,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            docx_path: PathBuf::from("demos/order_form.docx"),
            pdf_path: PathBuf::from("demos/order_agreement.pdf"),
            email_subject: "Please sign the attached order documents".to_string(),
        }
    }
}
