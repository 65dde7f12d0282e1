//! Demo order-envelope construction.
//!
//! # Responsibilities
//! - Generate the HTML order-acknowledgement page for the signer
//! - Read the two demo files (Word form, PDF agreement) from disk
//! - Assemble documents, recipients, tabs and routing into one request
//!
//! Construction is deterministic: identical inputs produce a structurally
//! identical request. The only side effect is the two file reads.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::DocumentsConfig;
use crate::envelope::types::{
    CarbonCopy, Document, EnvelopeRequest, EnvelopeStatus, FileExtension, Recipients, SignHere,
    Signer, Tabs,
};

/// Anchor embedded (visually hidden) in the generated HTML page.
pub const HTML_ANCHOR: &str = "**signature_1**";

/// Anchor present in both demo files. Anchor matching is global across the
/// envelope, so one tab covers both documents.
pub const FILE_ANCHOR: &str = "/sn1/";

/// Recipient arguments for the demo envelope. All fields are required and
/// non-empty; email syntax is validated by the platform, not here.
#[derive(Debug, Clone)]
pub struct EnvelopeArgs {
    pub signer_email: String,
    pub signer_name: String,
    pub cc_email: String,
    pub cc_name: String,
}

/// A demo document could not be read from disk.
#[derive(Debug, Error)]
#[error("failed to read demo document {path}")]
pub struct DocumentError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Build the three-document order envelope: a generated HTML page plus the
/// configured Word and PDF demo files, routed to one signer (order 1) and one
/// carbon copy (order 2), with status `sent`.
pub fn build_order_envelope(
    args: &EnvelopeArgs,
    docs: &DocumentsConfig,
) -> Result<EnvelopeRequest, DocumentError> {
    let html = order_acknowledgement_html(args);
    let docx_bytes = read_demo_file(&docs.docx_path)?;
    let pdf_bytes = read_demo_file(&docs.pdf_path)?;

    let documents = vec![
        Document::from_bytes("1", "Order acknowledgement", FileExtension::Html, html.as_bytes()),
        Document::from_bytes("2", "Order form", FileExtension::Docx, &docx_bytes),
        Document::from_bytes("3", "Order agreement", FileExtension::Pdf, &pdf_bytes),
    ];

    let signer = Signer {
        email: args.signer_email.clone(),
        name: args.signer_name.clone(),
        recipient_id: "1".to_string(),
        routing_order: 1,
        tabs: Tabs {
            sign_here_tabs: vec![SignHere::at_anchor(HTML_ANCHOR), SignHere::at_anchor(FILE_ANCHOR)],
        },
    };

    // The carbon copy is only notified after the signer completes.
    let carbon_copy = CarbonCopy {
        email: args.cc_email.clone(),
        name: args.cc_name.clone(),
        recipient_id: "2".to_string(),
        routing_order: 2,
    };

    Ok(EnvelopeRequest {
        email_subject: docs.email_subject.clone(),
        documents,
        recipients: Recipients {
            signers: vec![signer],
            carbon_copies: vec![carbon_copy],
        },
        status: EnvelopeStatus::Sent,
    })
}

fn read_demo_file(path: &PathBuf) -> Result<Vec<u8>, DocumentError> {
    fs::read(path).map_err(|source| DocumentError {
        path: path.clone(),
        source,
    })
}

/// Render the order-acknowledgement page. The signature anchor is printed in
/// white so recipients never see it but the platform's text search does.
fn order_acknowledgement_html(args: &EnvelopeArgs) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <body style="font-family: sans-serif; margin-left: 2em;">
    <h1 style="color: darkblue; margin-bottom: 0;">Signflow Demo Corp</h1>
    <h2 style="color: darkblue; margin-top: 0;">Order Processing</h2>
    <h4>Ordered by {signer_name}</h4>
    <p style="margin: 0;">Email: {signer_email}</p>
    <p style="margin: 0;">Copy to: {cc_name}, {cc_email}</p>
    <p style="margin-top: 3em;">
      This page acknowledges your order. Please review the attached order form
      and agreement, then sign below to confirm.
    </p>
    <h3 style="margin-top: 3em;">Agreed: <span style="color: white;">{anchor}</span></h3>
  </body>
</html>
"#,
        signer_name = args.signer_name,
        signer_email = args.signer_email,
        cc_name = args.cc_name,
        cc_email = args.cc_email,
        anchor = HTML_ANCHOR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    fn test_args() -> EnvelopeArgs {
        EnvelopeArgs {
            signer_email: "a@example.com".to_string(),
            signer_name: "A".to_string(),
            cc_email: "b@example.com".to_string(),
            cc_name: "B".to_string(),
        }
    }

    fn demo_docs(dir: &TempDir) -> DocumentsConfig {
        let docx_path = dir.path().join("order_form.docx");
        let pdf_path = dir.path().join("order_agreement.pdf");
        fs::write(&docx_path, "order form /sn1/").unwrap();
        fs::write(&pdf_path, "order agreement /sn1/").unwrap();
        DocumentsConfig {
            docx_path,
            pdf_path,
            email_subject: "Please sign the attached order documents".to_string(),
        }
    }

    #[test]
    fn test_builds_three_documents_and_two_recipients() {
        let dir = TempDir::new().unwrap();
        let envelope = build_order_envelope(&test_args(), &demo_docs(&dir)).unwrap();

        let ids: Vec<_> = envelope.documents.iter().map(|d| d.document_id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(envelope.documents[0].name, "Order acknowledgement");
        assert_eq!(envelope.documents[1].file_extension, FileExtension::Docx);
        assert_eq!(envelope.documents[2].file_extension, FileExtension::Pdf);

        assert_eq!(envelope.recipients.signers.len(), 1);
        assert_eq!(envelope.recipients.carbon_copies.len(), 1);
        assert_eq!(envelope.recipients.signers[0].recipient_id, "1");
        assert_eq!(envelope.recipients.carbon_copies[0].recipient_id, "2");
        assert_eq!(envelope.recipients.signers[0].email, "a@example.com");
        assert_eq!(envelope.status, EnvelopeStatus::Sent);
    }

    #[test]
    fn test_signer_routes_before_carbon_copy() {
        let dir = TempDir::new().unwrap();
        let envelope = build_order_envelope(&test_args(), &demo_docs(&dir)).unwrap();
        let signer_order = envelope.recipients.signers[0].routing_order;
        let cc_order = envelope.recipients.carbon_copies[0].routing_order;
        assert!(signer_order < cc_order);
    }

    #[test]
    fn test_html_embeds_recipients_and_anchor() {
        let dir = TempDir::new().unwrap();
        let envelope = build_order_envelope(&test_args(), &demo_docs(&dir)).unwrap();
        let html_bytes = BASE64.decode(&envelope.documents[0].document_base64).unwrap();
        let html = String::from_utf8(html_bytes).unwrap();

        assert!(html.contains("A"));
        assert!(html.contains("a@example.com"));
        assert!(html.contains("B"));
        assert!(html.contains("b@example.com"));
        assert!(html.contains(HTML_ANCHOR));
    }

    #[test]
    fn test_signer_has_both_anchor_tabs() {
        let dir = TempDir::new().unwrap();
        let envelope = build_order_envelope(&test_args(), &demo_docs(&dir)).unwrap();
        let tabs = &envelope.recipients.signers[0].tabs.sign_here_tabs;
        let anchors: Vec<_> = tabs.iter().map(|t| t.anchor_string.as_str()).collect();
        assert_eq!(anchors, [HTML_ANCHOR, FILE_ANCHOR]);
        for tab in tabs {
            assert_eq!(tab.anchor_x_offset, 20);
            assert_eq!(tab.anchor_y_offset, 10);
        }
    }

    #[test]
    fn test_builder_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let docs = demo_docs(&dir);
        let first = build_order_envelope(&test_args(), &docs).unwrap();
        let second = build_order_envelope(&test_args(), &docs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_demo_file_fails_with_not_found() {
        let dir = TempDir::new().unwrap();
        let mut docs = demo_docs(&dir);
        docs.docx_path = dir.path().join("does_not_exist.docx");

        let err = build_order_envelope(&test_args(), &docs).unwrap_err();
        assert_eq!(err.source.kind(), ErrorKind::NotFound);
        assert!(err.path.ends_with("does_not_exist.docx"));
    }
}
