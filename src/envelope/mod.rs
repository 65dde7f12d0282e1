//! Envelope construction and submission.
//!
//! # Responsibilities
//! - Define the envelope request shape the platform accepts
//! - Build the demo order envelope (three documents, signer + carbon copy)
//! - Drive the send flow: build, ensure token, submit
//! - Retrieve the account's previously sent envelopes

pub mod builder;
pub mod sender;
pub mod types;
