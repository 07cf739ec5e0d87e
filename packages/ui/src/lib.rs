//! This crate contains all shared UI for the workspace: the authentication
//! context, the session/role page gate, and the page-level behaviors
//! (navigation, scrolling, toasts, validation, formatting).

mod auth;
pub use auth::{use_auth, use_auth_client, AuthProvider, AuthState, LogoutButton, OAuthButton};

mod gate;
pub use gate::{evaluate_gate, paths, redirect, render_user_info, GateOutcome, PageGate};

mod navbar;
pub use navbar::Navbar;

pub mod scroll;
pub use scroll::{use_scroll_reveal, AnchorLink, BackToTop};

pub mod toast;
pub use toast::{show_toast, use_toasts, ToastLevel, ToastProvider};

pub mod validate;
pub use validate::{validate_field, FieldError, FieldKind, ValidatedInput};

pub mod format;
pub use format::{debounce, format_date, format_price, Debouncer, Throttle};
