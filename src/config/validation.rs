//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check URLs parse, identifiers are non-empty, timeouts are sane
//! - Return all problems at once, not just the first

use thiserror::Error;

use crate::config::schema::SignflowConfig;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("platform.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("platform.account_id must not be empty")]
    EmptyAccountId,

    #[error("platform.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("auth.token_url is not a valid URL: {0}")]
    InvalidTokenUrl(String),

    #[error("auth needs either static_token or client_id + client_secret")]
    MissingCredentials,

    #[error("documents.{0} must not be empty")]
    EmptyDocumentPath(&'static str),
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &SignflowConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.platform.base_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError::InvalidBaseUrl(
            config.platform.base_url.clone(),
        ));
    }
    if config.platform.account_id.trim().is_empty() {
        errors.push(ValidationError::EmptyAccountId);
    }
    if config.platform.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let has_static = config
        .auth
        .static_token
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    let has_credentials =
        !config.auth.client_id.trim().is_empty() && !config.auth.client_secret.trim().is_empty();
    if !has_static {
        if !has_credentials {
            errors.push(ValidationError::MissingCredentials);
        }
        if config.auth.token_url.parse::<url::Url>().is_err() {
            errors.push(ValidationError::InvalidTokenUrl(
                config.auth.token_url.clone(),
            ));
        }
    }

    if config.documents.docx_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyDocumentPath("docx_path"));
    }
    if config.documents.pdf_path.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyDocumentPath("pdf_path"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
