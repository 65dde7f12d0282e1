//! HTTP client for the e-signature platform.
//!
//! # Responsibilities
//! - Issue authenticated REST calls against the account's envelope endpoints
//! - Surface structured platform rejections distinctly from transport errors
//! - Tag every request with an X-Request-Id for correlation

pub mod client;
pub mod types;

pub use client::PlatformClient;
pub use types::{ApiError, EnvelopeCreated, EnvelopeList, EnvelopeSummary};
