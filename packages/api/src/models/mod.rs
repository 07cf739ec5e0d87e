//! Data models shared across the workspace.

mod user;

pub use user::{Role, User, UserMetadata, PLACEHOLDER_AVATAR};
