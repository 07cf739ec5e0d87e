//! # API crate — hosted-auth wrapper for FreshPlate
//!
//! FreshPlate does not run its own credential backend: authentication is
//! delegated to a hosted provider that owns credential storage, session
//! issuance, and OAuth handshakes. This crate is the only place that talks
//! to it. Everything above (the `ui` and `web` crates) sees typed models
//! and a small client with a uniform result contract.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Provider HTTP client, locally stored session, auth-state-change events |
//! | [`config`] | Provider endpoint, publishable key, OAuth redirect target |
//! | [`error`] | [`AuthError`] taxonomy shared by every fallible operation |
//! | [`models`] | [`User`], [`Role`] and their helpers |
//!
//! ## Result contract
//!
//! Every credential operation returns `Result<_, AuthError>` and logs the
//! failure before returning it; nothing in this crate panics on a provider
//! error. Session retrieval degrades further: any failure (unreachable
//! provider state, corrupt stored payload, expired token) is logged and
//! collapses to `None`, indistinguishable from "not signed in".

pub mod auth;
pub mod config;
pub mod error;
pub mod models;

pub use auth::{
    AuthClient, AuthEvent, AuthEvents, OAuthProvider, Session, SignUpData, SubscriptionId,
};
pub use config::ProviderConfig;
pub use error::{AuthError, AuthResult};
pub use models::{Role, User, UserMetadata};
