//! Session data types.

use serde::{Deserialize, Serialize};

use crate::models::{Role, User};

/// A session issued by the provider.
///
/// The provider owns the session's lifetime; this layer stores the issued
/// payload verbatim and only ever reads it back. There is no refresh logic:
/// an expired session is treated the same as no session at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Unix timestamp (seconds) after which the token is no longer valid.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Whether the session is past its expiry at the given instant.
    /// Sessions without an expiry never expire locally.
    pub fn is_expired(&self, now: i64) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }

    /// Role of the session's user, defaulting to consumer.
    pub fn role(&self) -> Role {
        self.user.role()
    }
}

/// Current unix time in seconds.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_unix() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_unix() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserMetadata;

    fn session(expires_at: Option<i64>) -> Session {
        Session {
            access_token: "token".to_string(),
            token_type: "bearer".to_string(),
            expires_at,
            refresh_token: None,
            user: User {
                id: "u1".to_string(),
                email: "ada@example.com".to_string(),
                user_metadata: UserMetadata::default(),
            },
        }
    }

    #[test]
    fn test_expiry_boundary() {
        let s = session(Some(1_000));
        assert!(!s.is_expired(999));
        assert!(s.is_expired(1_000));
        assert!(s.is_expired(1_001));
    }

    #[test]
    fn test_no_expiry_never_expires() {
        assert!(!session(None).is_expired(i64::MAX));
    }
}
