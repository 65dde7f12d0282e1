//! Authentication context for the signing platform.
//!
//! # Responsibilities
//! - Define the capability the sender needs: a valid bearer token plus the
//!   account identifier it belongs to
//! - Refresh OAuth tokens before expiry so every send carries a live token
//! - Offer a static provider for pre-issued tokens and tests

pub mod provider;
pub mod token;

pub use provider::{OauthTokenProvider, StaticTokenProvider, TokenProvider};
pub use token::{AccessToken, AuthError};
