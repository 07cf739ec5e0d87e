//! # Provider HTTP client
//!
//! [`AuthClient`] wraps the hosted provider's auth endpoints:
//!
//! - `POST {base}/token?grant_type=password` — email/password sign-in.
//! - `POST {base}/signup` — registration; role and display name travel in
//!   the `data` metadata object and come back inside the user record.
//! - `GET {base}/authorize?provider=…&redirect_to=…` — OAuth hand-off; the
//!   client only builds the URL, the caller navigates to it.
//! - `POST {base}/logout` — invalidates the session server-side.
//!
//! ## Contract
//!
//! Every operation returns `Result<_, AuthError>`; failures are logged
//! here, once, before being returned, so callers can branch on the result
//! without re-reporting. Session retrieval ([`AuthClient::get_session`]) is
//! stricter still: every failure path degrades to `None`.
//!
//! A successful sign-in or sign-up stores the issued session locally and
//! emits [`AuthEvent::SignedIn`]; sign-out clears it and emits
//! [`AuthEvent::SignedOut`] whether or not the provider call succeeded.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use super::events::{AuthEvent, AuthEvents, SubscriptionId};
use super::session::{now_unix, Session};
use super::store;
use crate::config::ProviderConfig;
use crate::error::{AuthError, AuthResult};
use crate::models::{Role, User};

/// Third-party identity providers the hosted backend can hand off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Facebook,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
        }
    }
}

/// Outcome of a registration.
///
/// When the provider requires email confirmation it returns the bare user
/// and no session; otherwise the visitor is signed in immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpData {
    pub session: Option<Session>,
    pub user: User,
}

/// Raw sign-up response: either a full session or just the created user.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpPayload {
    Session(Session),
    Pending(User),
}

/// Error body shape used by the provider. Which field carries the message
/// varies by endpoint.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProviderErrorBody {
    fn message(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.error)
            .unwrap_or_else(|| "unknown provider error".to_string())
    }
}

/// Client for the hosted auth provider.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    config: ProviderConfig,
    events: AuthEvents,
}

impl AuthClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            events: AuthEvents::new(),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Subscribe to auth-state changes emitted by this client.
    pub fn on_auth_state_change(
        &self,
        listener: impl FnMut(AuthEvent, Option<&Session>) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Remove an auth-state-change listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Sign in with email and password.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> AuthResult<Session> {
        let outcome = async {
            let response = self
                .http
                .post(self.endpoint("token"))
                .query(&[("grant_type", "password")])
                .header("apikey", &self.config.api_key)
                .json(&json!({ "email": email, "password": password }))
                .send()
                .await?;
            parse_response::<Session>(response).await
        }
        .await;

        match outcome {
            Ok(session) => {
                self.remember(&session);
                self.events.emit(AuthEvent::SignedIn, Some(&session));
                Ok(session)
            }
            Err(err) => {
                tracing::error!("sign-in failed: {err}");
                Err(err)
            }
        }
    }

    /// Register a new account with a role and display name.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        role: Role,
        full_name: &str,
    ) -> AuthResult<SignUpData> {
        let outcome = async {
            let response = self
                .http
                .post(self.endpoint("signup"))
                .header("apikey", &self.config.api_key)
                .json(&json!({
                    "email": email,
                    "password": password,
                    "data": { "role": role, "full_name": full_name },
                }))
                .send()
                .await?;
            parse_response::<SignUpPayload>(response).await
        }
        .await;

        match outcome {
            Ok(SignUpPayload::Session(session)) => {
                self.remember(&session);
                self.events.emit(AuthEvent::SignedIn, Some(&session));
                Ok(SignUpData {
                    user: session.user.clone(),
                    session: Some(session),
                })
            }
            Ok(SignUpPayload::Pending(user)) => Ok(SignUpData {
                session: None,
                user,
            }),
            Err(err) => {
                tracing::error!("registration failed: {err}");
                Err(err)
            }
        }
    }

    /// Build the URL that starts an OAuth handshake with the given
    /// provider. The caller is responsible for navigating to it.
    pub fn oauth_authorize_url(&self, provider: OAuthProvider) -> AuthResult<String> {
        Url::parse_with_params(
            &self.endpoint("authorize"),
            &[
                ("provider", provider.as_str()),
                ("redirect_to", self.config.redirect_to.as_str()),
            ],
        )
        .map(String::from)
        .map_err(|err| {
            tracing::error!("failed to build oauth url: {err}");
            AuthError::Provider(format!("invalid authorize url: {err}"))
        })
    }

    /// Sign out. The local session is dropped and [`AuthEvent::SignedOut`]
    /// fires regardless of whether the provider call succeeds; the error,
    /// if any, is logged and returned for the caller to inspect.
    pub async fn sign_out(&self) -> AuthResult<()> {
        let stored = self.get_session();
        store::clear();

        let result = match stored {
            Some(session) => {
                let outcome = async {
                    let response = self
                        .http
                        .post(self.endpoint("logout"))
                        .header("apikey", &self.config.api_key)
                        .bearer_auth(&session.access_token)
                        .send()
                        .await?;
                    let status = response.status();
                    if status.is_success() {
                        Ok(())
                    } else {
                        Err(AuthError::Provider(format!(
                            "logout returned status {status}"
                        )))
                    }
                }
                .await;
                if let Err(ref err) = outcome {
                    tracing::error!("sign-out failed: {err}");
                }
                outcome
            }
            None => Ok(()),
        };

        self.events.emit(AuthEvent::SignedOut, None);
        result
    }

    /// The current session, or `None`. Missing, corrupt, and expired
    /// stored sessions are all treated as "not signed in"; the latter two
    /// are logged.
    pub fn get_session(&self) -> Option<Session> {
        let raw = store::load_raw()?;
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                if session.is_expired(now_unix()) {
                    tracing::warn!("stored session has expired; treating as signed out");
                    None
                } else {
                    Some(session)
                }
            }
            Err(err) => {
                tracing::error!("session check failed: {err}");
                None
            }
        }
    }

    fn remember(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => store::store_raw(&raw),
            Err(err) => tracing::error!("failed to serialize session: {err}"),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.url, path)
    }
}

async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> AuthResult<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let message = match response.json::<ProviderErrorBody>().await {
            Ok(body) => body.message(),
            Err(_) => format!("provider returned status {status}"),
        };
        Err(AuthError::Provider(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> AuthClient {
        AuthClient::new(
            ProviderConfig::new("https://auth.example.com/auth/v1", "anon-key")
                .with_redirect("https://freshplate.example/"),
        )
    }

    fn session_json(expires_at: i64) -> String {
        format!(
            r#"{{"access_token":"tok","token_type":"bearer","expires_at":{expires_at},
                "user":{{"id":"u1","email":"ada@example.com",
                "user_metadata":{{"role":"chef","full_name":"Ada"}}}}}}"#
        )
    }

    #[test]
    fn test_oauth_url_carries_provider_and_redirect() {
        let url = client().oauth_authorize_url(OAuthProvider::Google).unwrap();
        assert!(url.starts_with("https://auth.example.com/auth/v1/authorize?"));
        assert!(url.contains("provider=google"));
        assert!(url.contains("redirect_to=https%3A%2F%2Ffreshplate.example%2F"));
    }

    #[test]
    fn test_get_session_reads_stored_payload() {
        super::store::store_raw(&session_json(i64::MAX));
        let session = client().get_session().unwrap();
        assert_eq!(session.user.email, "ada@example.com");
        assert_eq!(session.role(), Role::Chef);
        super::store::clear();
    }

    #[test]
    fn test_get_session_corrupt_payload_degrades_to_none() {
        super::store::store_raw("definitely-not-json");
        assert!(client().get_session().is_none());
        super::store::clear();
    }

    #[test]
    fn test_get_session_expired_degrades_to_none() {
        super::store::store_raw(&session_json(1));
        assert!(client().get_session().is_none());
        super::store::clear();
    }

    #[test]
    fn test_remember_round_trips_through_store() {
        let c = client();
        let session: Session = serde_json::from_str(&session_json(i64::MAX)).unwrap();
        c.remember(&session);
        assert_eq!(c.get_session(), Some(session));
        super::store::clear();
    }

    #[test]
    fn test_signup_payload_session_shape() {
        let payload: SignUpPayload = serde_json::from_str(&session_json(i64::MAX)).unwrap();
        assert!(matches!(payload, SignUpPayload::Session(_)));
    }

    #[test]
    fn test_signup_payload_pending_shape() {
        let payload: SignUpPayload = serde_json::from_str(
            r#"{"id":"u2","email":"new@example.com","user_metadata":{"role":"courier"}}"#,
        )
        .unwrap();
        let SignUpPayload::Pending(user) = payload else {
            panic!("expected pending variant");
        };
        assert_eq!(user.role(), Role::Courier);
    }

    #[test]
    fn test_provider_error_message_precedence() {
        let body: ProviderErrorBody =
            serde_json::from_str(r#"{"msg":"bad email","error":"invalid_request"}"#).unwrap();
        assert_eq!(body.message(), "bad email");

        let body: ProviderErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), "unknown provider error");
    }

    #[test]
    fn test_role_metadata_serializes_lowercase() {
        let body = json!({ "data": { "role": Role::Chef } });
        assert_eq!(body["data"]["role"], "chef");
    }
}
