//! Provider configuration.
//!
//! The hosted auth backend is addressed by a base URL and a publishable API
//! key, both baked in at build time (this crate ships to the browser; there
//! is no process environment to read at runtime). The OAuth redirect target
//! defaults to the current origin so the provider sends the visitor back to
//! the page that started the handshake.

/// Configuration for the hosted auth provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Base URL of the provider's auth API, without a trailing slash.
    pub url: String,
    /// Publishable (anon) API key sent with every request.
    pub api_key: String,
    /// Where the provider redirects after an OAuth handshake.
    pub redirect_to: String,
}

impl ProviderConfig {
    /// Create a config for the given provider endpoint and key.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            redirect_to: current_origin(),
        }
    }

    /// Build the config from `FRESHPLATE_AUTH_URL` / `FRESHPLATE_AUTH_KEY`,
    /// resolved at compile time.
    pub fn from_env() -> Self {
        let url = option_env!("FRESHPLATE_AUTH_URL").unwrap_or("http://localhost:9999/auth/v1");
        let api_key = option_env!("FRESHPLATE_AUTH_KEY").unwrap_or("");
        if api_key.is_empty() {
            tracing::warn!("FRESHPLATE_AUTH_KEY not set at build time; provider calls will be anonymous");
        }
        Self::new(url, api_key)
    }

    /// Override the OAuth redirect target.
    pub fn with_redirect(mut self, redirect_to: impl Into<String>) -> Self {
        self.redirect_to = redirect_to.into();
        self
    }
}

/// Origin of the current page, used as the default OAuth redirect target.
#[cfg(target_arch = "wasm32")]
fn current_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{origin}/"))
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn current_origin() -> String {
    "http://localhost:8080/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ProviderConfig::new("https://auth.example.com/auth/v1/", "key");
        assert_eq!(config.url, "https://auth.example.com/auth/v1");
    }

    #[test]
    fn test_with_redirect_overrides_origin() {
        let config = ProviderConfig::new("https://auth.example.com", "key")
            .with_redirect("https://freshplate.example/welcome");
        assert_eq!(config.redirect_to, "https://freshplate.example/welcome");
    }
}
