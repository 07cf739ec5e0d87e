//! Error taxonomy for provider operations.
//!
//! Only two failure kinds exist on the auth path: the provider rejected the
//! request ([`AuthError::Provider`]) or the request never completed
//! ([`AuthError::Http`]). A third, [`AuthError::Session`], covers a locally
//! stored session payload that no longer parses. None of these are fatal to
//! a page; callers log and degrade.

use thiserror::Error;

/// Errors surfaced by the provider wrapper.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider answered with an error body.
    #[error("provider error: {0}")]
    Provider(String),

    /// The request failed at the transport layer.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The locally stored session payload is malformed.
    #[error("invalid session data: {0}")]
    Session(String),
}

/// Result alias used across the crate.
pub type AuthResult<T> = Result<T, AuthError>;
