//! Envelope request types.
//!
//! All types serialize to the camelCase JSON the platform's envelope-creation
//! endpoint expects. Document bytes travel base64-encoded in `documentBase64`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// A complete envelope-creation request.
///
/// Document order is significant: it determines page order inside the
/// envelope. Recipient ids must be unique across signers and carbon copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeRequest {
    /// Subject line of the signing-request email.
    pub email_subject: String,

    /// Documents in page order.
    pub documents: Vec<Document>,

    /// Signing and copy recipients.
    pub recipients: Recipients,

    /// `Sent` dispatches immediately; `Created` leaves an editable draft.
    pub status: EnvelopeStatus,
}

/// Envelope lifecycle state requested at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Sent,
    Created,
}

/// Supported source formats for envelope documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileExtension {
    Html,
    Docx,
    Pdf,
}

/// One document inside an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Label unique within the envelope ("1", "2", ...).
    pub document_id: String,

    /// Display name shown to recipients.
    pub name: String,

    /// Source format of the raw bytes.
    pub file_extension: FileExtension,

    /// Raw document bytes, base64-encoded.
    pub document_base64: String,
}

impl Document {
    /// Build a document from raw bytes, encoding them for the wire.
    pub fn from_bytes(
        document_id: impl Into<String>,
        name: impl Into<String>,
        file_extension: FileExtension,
        bytes: &[u8],
    ) -> Self {
        Self {
            document_id: document_id.into(),
            name: name.into(),
            file_extension,
            document_base64: BASE64.encode(bytes),
        }
    }
}

/// Recipient lists, grouped by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipients {
    pub signers: Vec<Signer>,
    pub carbon_copies: Vec<CarbonCopy>,
}

/// A recipient who signs. Lower routing order is contacted first; equal
/// values mean parallel delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signer {
    pub email: String,
    pub name: String,
    pub recipient_id: String,
    pub routing_order: u32,
    pub tabs: Tabs,
}

/// A recipient who receives the completed envelope but does not sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonCopy {
    pub email: String,
    pub name: String,
    pub recipient_id: String,
    pub routing_order: u32,
}

/// Field-placement instructions for a signer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tabs {
    pub sign_here_tabs: Vec<SignHere>,
}

/// A signature field auto-placed wherever `anchor_string` occurs in any
/// document's rendered text. Placement silently fails upstream if the anchor
/// appears nowhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignHere {
    pub anchor_string: String,
    pub anchor_x_offset: u32,
    pub anchor_y_offset: u32,
    pub anchor_units: AnchorUnits,
}

/// Unit for anchor offsets. The platform accepts others; this client always
/// places in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorUnits {
    #[default]
    Pixels,
}

impl SignHere {
    /// A sign-here field at the standard demo offset from `anchor`.
    pub fn at_anchor(anchor: impl Into<String>) -> Self {
        Self {
            anchor_string: anchor.into(),
            anchor_x_offset: 20,
            anchor_y_offset: 10,
            anchor_units: AnchorUnits::Pixels,
        }
    }
}
