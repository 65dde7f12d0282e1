//! Signflow e-signature client library
//!
//! Builds a fixed three-document signing envelope (generated HTML page, Word
//! document, PDF), places signature fields via anchor strings, and submits
//! the envelope to an e-signature platform under a bearer token. A companion
//! operation lists envelopes already sent from the account.

pub mod auth;
pub mod config;
pub mod envelope;
pub mod platform;

pub use config::schema::SignflowConfig;
pub use envelope::builder::EnvelopeArgs;
pub use platform::client::PlatformClient;
