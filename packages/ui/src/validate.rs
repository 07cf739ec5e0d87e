//! Inline form validation.
//!
//! Three rules cover every form in the app: required fields must be
//! non-empty after trimming, email fields must look like an address, and
//! passwords being chosen at registration must meet a minimum length.
//! Fields validate on blur; once a field has been flagged invalid it also
//! re-validates on every keystroke so the message clears as soon as the
//! input is fixed.

use std::fmt;

use dioxus::prelude::*;

/// Minimum length for a password chosen at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// What a field is validated as, beyond the required check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// `register` marks a password being chosen now (sign-up), which is
    /// held to [`MIN_PASSWORD_LEN`]; sign-in passwords are not.
    Password { register: bool },
}

impl FieldKind {
    fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password { .. } => "password",
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    PasswordTooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            FieldError::Required => "This field is required.",
            FieldError::InvalidEmail => "Please enter a valid email address.",
            FieldError::PasswordTooShort => "Password must be at least 6 characters.",
        };
        f.write_str(message)
    }
}

/// Validate a single field value.
pub fn validate_field(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Password { register: true } if value.chars().count() < MIN_PASSWORD_LEN => {
            Err(FieldError::PasswordTooShort)
        }
        _ => Ok(()),
    }
}

/// Loose address shape: something before the `@`, a dotted domain after
/// it, no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

/// Text input with inline validation.
///
/// The caller owns both the value and the error signal, so a submit
/// handler can run the same rules and block on a stale error.
#[component]
pub fn ValidatedInput(
    kind: FieldKind,
    name: String,
    #[props(default = String::new())] placeholder: String,
    value: Signal<String>,
    error: Signal<Option<FieldError>>,
) -> Element {
    let mut value = value;
    let mut error = error;
    let mut validated = use_signal(|| false);

    let status = match (error(), validated()) {
        (Some(_), _) => "invalid",
        (None, true) => "valid",
        (None, false) => "",
    };

    rsx! {
        div { class: "form-field",
            input {
                class: "{status}",
                r#type: kind.input_type(),
                name: "{name}",
                placeholder: "{placeholder}",
                value: "{value}",
                required: true,
                onblur: move |_| {
                    validated.set(true);
                    error.set(validate_field(kind, &value()).err());
                },
                oninput: move |evt| {
                    value.set(evt.value());
                    // only re-check live once the field has been flagged
                    if error().is_some() {
                        error.set(validate_field(kind, &value()).err());
                    }
                },
            }
            if let Some(err) = error() {
                div { class: "error-msg-inline", "{err}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_required_field_is_invalid() {
        assert_eq!(validate_field(FieldKind::Text, ""), Err(FieldError::Required));
        assert_eq!(
            validate_field(FieldKind::Email, "   "),
            Err(FieldError::Required)
        );
    }

    #[test]
    fn test_email_shape() {
        assert_eq!(
            validate_field(FieldKind::Email, "not-an-email"),
            Err(FieldError::InvalidEmail)
        );
        assert!(validate_field(FieldKind::Email, "ada@example.com").is_ok());
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(is_valid_email("ada+tag@sub.example.co"));
    }

    #[test]
    fn test_register_password_minimum_length() {
        let register = FieldKind::Password { register: true };
        assert_eq!(
            validate_field(register, "abc"),
            Err(FieldError::PasswordTooShort)
        );
        assert!(validate_field(register, "abcdef").is_ok());
    }

    #[test]
    fn test_signin_password_skips_length_rule() {
        assert!(validate_field(FieldKind::Password { register: false }, "abc").is_ok());
    }

    #[test]
    fn test_plain_text_only_requires_presence() {
        assert!(validate_field(FieldKind::Text, "x").is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::Required.to_string(), "This field is required.");
        assert_eq!(
            FieldError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters."
        );
    }
}
