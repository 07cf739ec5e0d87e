//! Login page: email/password sign-in plus Google OAuth.

use api::OAuthProvider;
use dioxus::prelude::*;
use ui::{
    paths, redirect, show_toast, use_auth, use_auth_client, use_toasts, validate_field,
    FieldError, FieldKind, OAuthButton, ToastLevel, ValidatedInput,
};

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let client = use_auth_client();
    let toasts = use_toasts();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut email_error = use_signal(|| Option::<FieldError>::None);
    let mut password_error = use_signal(|| Option::<FieldError>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the visitor's dashboard.
    let state = auth();
    if !state.loading {
        if let Some(session) = state.session.as_ref() {
            redirect(session.role().dashboard_path());
            return rsx! {};
        }
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            email_error.set(validate_field(FieldKind::Email, &email()).err());
            password_error
                .set(validate_field(FieldKind::Password { register: false }, &password()).err());
            if email_error().is_some() || password_error().is_some() {
                return;
            }

            loading.set(true);
            match client.sign_in_with_password(&email(), &password()).await {
                Ok(session) => {
                    show_toast(toasts, ToastLevel::Success, "Welcome back!");
                    redirect(session.role().dashboard_path());
                }
                Err(err) => {
                    loading.set(false);
                    show_toast(toasts, ToastLevel::Error, err.to_string());
                }
            }
        });
    };

    let password_kind = FieldKind::Password { register: false };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Welcome back" }
                p { class: "auth-subtitle", "Sign in to order, cook, or deliver." }

                form { class: "auth-form", novalidate: true, onsubmit: handle_submit,
                    ValidatedInput {
                        kind: FieldKind::Email,
                        name: "login-email",
                        placeholder: "Email",
                        value: email,
                        error: email_error,
                    }
                    ValidatedInput {
                        kind: password_kind,
                        name: "login-password",
                        placeholder: "Password",
                        value: password,
                        error: password_error,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }

                div { class: "auth-divider", "or" }

                OAuthButton {
                    provider: OAuthProvider::Google,
                    label: "Continue with Google",
                    class: "btn oauth-btn",
                }

                p { class: "auth-switch",
                    "New to FreshPlate? "
                    a { href: paths::REGISTER, "Create an account" }
                }
            }
        }
    }
}
