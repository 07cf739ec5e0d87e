//! Authentication context and hooks for the UI.

use api::{AuthClient, AuthEvent, OAuthProvider, Session, User};
use dioxus::prelude::*;

use crate::gate::{paths, redirect};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the visitor signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The provider client supplied at the app root.
pub fn use_auth_client() -> AuthClient {
    use_context::<AuthClient>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// The state is seeded from the stored provider session and then follows
/// the client's auth-state-change events: a sign-in anywhere in the app
/// updates it, a sign-out clears it.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_auth_client();

    let mut auth_state = use_signal({
        let client = client.clone();
        move || AuthState {
            session: client.get_session(),
            loading: false,
        }
    });

    use_hook(move || {
        client.on_auth_state_change(move |event, session| match event {
            AuthEvent::SignedIn => auth_state.set(AuthState {
                session: session.cloned(),
                loading: false,
            }),
            AuthEvent::SignedOut => auth_state.set(AuthState {
                session: None,
                loading: false,
            }),
        })
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that hands the visitor off to a third-party OAuth provider.
#[component]
pub fn OAuthButton(
    provider: OAuthProvider,
    #[props(default = "Continue".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_auth_client();

    let onclick = move |_| {
        // failures are logged by the client
        if let Ok(url) = client.oauth_authorize_url(provider) {
            redirect(&url);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Button to sign out the current visitor. Always lands on the login
/// page, even when the provider call fails.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_auth_client();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            // failure is logged by the client; the redirect happens regardless
            let _ = client.sign_out().await;
            redirect(paths::LOGIN);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
