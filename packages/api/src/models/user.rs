//! # User model
//!
//! The provider embeds the user inside every session it issues. Only three
//! pieces of metadata matter to FreshPlate: the role (which dashboard the
//! visitor belongs on), an optional display name, and an optional avatar.
//!
//! A user always resolves to exactly one [`Role`]: missing or unrecognized
//! role metadata falls back to [`Role::Consumer`], so gating logic never has
//! to handle an "unknown role" case.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Shown when the user has no avatar of their own.
pub const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/150";

/// Account role, fixed at registration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Consumer,
    Chef,
    Courier,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Consumer, Role::Chef, Role::Courier];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Consumer => "consumer",
            Role::Chef => "chef",
            Role::Courier => "courier",
        }
    }

    /// Parse a role string; unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "consumer" => Some(Role::Consumer),
            "chef" => Some(Role::Chef),
            "courier" => Some(Role::Courier),
            _ => None,
        }
    }

    /// The default landing page for this role.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Chef => "/chef-dashboard",
            Role::Courier => "/courier-dashboard",
            Role::Consumer => "/consumer-dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form metadata the provider stores alongside the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<Role>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// The user's role, defaulting to [`Role::Consumer`] when unset.
    pub fn role(&self) -> Role {
        self.user_metadata.role.unwrap_or_default()
    }

    /// Display name, falling back to the local part of the email address.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.user_metadata.full_name.as_deref() {
            if !name.trim().is_empty() {
                return name.to_string();
            }
        }
        match self.email.split_once('@') {
            Some((local, _)) => local.to_string(),
            None => self.email.clone(),
        }
    }

    /// Avatar URL, falling back to [`PLACEHOLDER_AVATAR`].
    pub fn avatar_url(&self) -> &str {
        self.user_metadata
            .avatar_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_AVATAR)
    }
}

/// Role strings the provider hands back are not under our control; anything
/// unrecognized degrades to the default role instead of failing the whole
/// session deserialization.
fn lenient_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|value| Role::parse(&value).unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(metadata: UserMetadata) -> User {
        User {
            id: "11111111-2222-3333-4444-555555555555".to_string(),
            email: "ada@example.com".to_string(),
            user_metadata: metadata,
        }
    }

    #[test]
    fn test_role_defaults_to_consumer() {
        assert_eq!(user(UserMetadata::default()).role(), Role::Consumer);
    }

    #[test]
    fn test_unknown_role_string_degrades_to_consumer() {
        let parsed: User = serde_json::from_str(
            r#"{"id":"u1","email":"ada@example.com","user_metadata":{"role":"admin"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.role(), Role::Consumer);
    }

    #[test]
    fn test_known_roles_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_dashboard_mapping() {
        assert_eq!(Role::Chef.dashboard_path(), "/chef-dashboard");
        assert_eq!(Role::Courier.dashboard_path(), "/courier-dashboard");
        assert_eq!(Role::Consumer.dashboard_path(), "/consumer-dashboard");
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let u = user(UserMetadata {
            full_name: Some("Ada Lovelace".to_string()),
            ..Default::default()
        });
        assert_eq!(u.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        assert_eq!(user(UserMetadata::default()).display_name(), "ada");
    }

    #[test]
    fn test_avatar_falls_back_to_placeholder() {
        assert_eq!(user(UserMetadata::default()).avatar_url(), PLACEHOLDER_AVATAR);
        let u = user(UserMetadata {
            avatar_url: Some("https://cdn.example.com/a.png".to_string()),
            ..Default::default()
        });
        assert_eq!(u.avatar_url(), "https://cdn.example.com/a.png");
    }
}
