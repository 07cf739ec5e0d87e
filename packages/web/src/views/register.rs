//! Registration page: name, email, password, and a role choice.

use api::Role;
use dioxus::prelude::*;
use ui::{
    paths, redirect, show_toast, use_auth, use_auth_client, use_toasts, validate_field,
    FieldError, FieldKind, ToastLevel, ValidatedInput,
};

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Consumer => "Order meals (consumer)",
        Role::Chef => "Cook meals (chef)",
        Role::Courier => "Deliver meals (courier)",
    }
}

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let client = use_auth_client();
    let toasts = use_toasts();

    let full_name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut role = use_signal(|| Role::Consumer);
    let mut name_error = use_signal(|| Option::<FieldError>::None);
    let mut email_error = use_signal(|| Option::<FieldError>::None);
    let mut password_error = use_signal(|| Option::<FieldError>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: no second account from here.
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
            name_error.set(validate_field(FieldKind::Text, &full_name()).err());
            email_error.set(validate_field(FieldKind::Email, &email()).err());
            password_error
                .set(validate_field(FieldKind::Password { register: true }, &password()).err());
            if name_error().is_some() || email_error().is_some() || password_error().is_some() {
                return;
            }

            loading.set(true);
            match client
                .sign_up(&email(), &password(), role(), full_name().trim())
                .await
            {
                Ok(data) => match data.session {
                    Some(session) => {
                        show_toast(toasts, ToastLevel::Success, "Welcome to FreshPlate!");
                        redirect(session.role().dashboard_path());
                    }
                    None => {
                        show_toast(
                            toasts,
                            ToastLevel::Info,
                            "Almost there — check your inbox to confirm your account.",
                        );
                        redirect(paths::LOGIN);
                    }
                },
                Err(err) => {
                    loading.set(false);
                    show_toast(toasts, ToastLevel::Error, err.to_string());
                }
            }
        });
    };

    let password_kind = FieldKind::Password { register: true };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Create your account" }
                p { class: "auth-subtitle", "Join as a consumer, chef, or courier." }

                form { class: "auth-form", novalidate: true, onsubmit: handle_submit,
                    ValidatedInput {
                        kind: FieldKind::Text,
                        name: "register-name",
                        placeholder: "Full name",
                        value: full_name,
                        error: name_error,
                    }
                    ValidatedInput {
                        kind: FieldKind::Email,
                        name: "register-email",
                        placeholder: "Email",
                        value: email,
                        error: email_error,
                    }
                    ValidatedInput {
                        kind: password_kind,
                        name: "register-password",
                        placeholder: "Password (min 6 characters)",
                        value: password,
                        error: password_error,
                    }

                    select {
                        class: "role-select",
                        onchange: move |evt| role.set(Role::parse(&evt.value()).unwrap_or_default()),
                        for option_role in Role::ALL {
                            option {
                                value: option_role.as_str(),
                                selected: role() == option_role,
                                {role_label(option_role)}
                            }
                        }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign up" }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    a { href: paths::LOGIN, "Sign in" }
                }
            }
        }
    }
}
