//! Send and list flows.
//!
//! Each call is a single logical task: build the envelope, ensure a valid
//! token, then make exactly one API call. The two awaits are sequential
//! because the submission needs the refreshed token. No retries.

use thiserror::Error;

use crate::auth::provider::TokenProvider;
use crate::auth::token::AuthError;
use crate::config::schema::DocumentsConfig;
use crate::envelope::builder::{build_order_envelope, DocumentError, EnvelopeArgs};
use crate::platform::client::PlatformClient;
use crate::platform::types::{ApiError, EnvelopeCreated, EnvelopeList};

/// Errors from the send and list flows. Each variant maps to one failure
/// domain: local file reads, token acquisition, or the platform call.
#[derive(Debug, Error)]
pub enum SendError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Build the demo order envelope and submit it for sending.
///
/// The envelope is built before the token is touched, so a missing demo file
/// fails the call without any network activity. On success the platform
/// reports status `sent` and the new envelope's identifier.
pub async fn send_order_envelope(
    provider: &dyn TokenProvider,
    client: &PlatformClient,
    docs: &DocumentsConfig,
    args: &EnvelopeArgs,
) -> Result<EnvelopeCreated, SendError> {
    let envelope = build_order_envelope(args, docs)?;
    let token = provider.ensure_valid_token().await?;

    tracing::info!(
        signer = %args.signer_email,
        cc = %args.cc_email,
        "submitting order envelope"
    );
    let created = client
        .create_envelope(&token, provider.account_id(), &envelope)
        .await?;
    tracing::info!(
        envelope_id = %created.envelope_id,
        status = ?created.status,
        "envelope accepted by platform"
    );
    Ok(created)
}

/// Retrieve the account's previously sent envelopes. The result's
/// `envelopes` field may be empty; no pagination or filtering is applied.
pub async fn list_sent_envelopes(
    provider: &dyn TokenProvider,
    client: &PlatformClient,
) -> Result<EnvelopeList, SendError> {
    let token = provider.ensure_valid_token().await?;
    let list = client
        .list_envelopes(&token, provider.account_id())
        .await?;
    tracing::info!(count = list.envelopes.len(), "retrieved sent envelopes");
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::AccessToken;
    use crate::config::schema::PlatformConfig;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Stub that counts how often the sender asks for a token.
    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TokenProvider for CountingProvider {
        async fn ensure_valid_token(&self) -> Result<AccessToken, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(AccessToken::new("tok", Duration::from_secs(3600)))
        }

        fn account_id(&self) -> &str {
            "acct-1"
        }
    }

    #[tokio::test]
    async fn test_missing_document_fails_before_token_check() {
        let provider = CountingProvider {
            calls: AtomicUsize::new(0),
        };
        let client = PlatformClient::new(&PlatformConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            account_id: "acct-1".to_string(),
            request_timeout_secs: 1,
        })
        .unwrap();
        let docs = DocumentsConfig {
            docx_path: PathBuf::from("/definitely/missing/order_form.docx"),
            pdf_path: PathBuf::from("/definitely/missing/order_agreement.pdf"),
            email_subject: "subject".to_string(),
        };
        let args = EnvelopeArgs {
            signer_email: "a@example.com".to_string(),
            signer_name: "A".to_string(),
            cc_email: "b@example.com".to_string(),
            cc_name: "B".to_string(),
        };

        let err = send_order_envelope(&provider, &client, &docs, &args)
            .await
            .unwrap_err();
        assert!(matches!(err, SendError::Document(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }
}
