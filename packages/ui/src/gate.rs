//! # Session/role gate for restricted pages
//!
//! Every dashboard wraps its content in [`PageGate`] with the roles that
//! may view it. The decision itself is the pure [`evaluate_gate`]; the
//! component only carries out the verdict:
//!
//! - no session → redirect to the login page;
//! - wrong role → redirect to that role's own dashboard;
//! - otherwise → render the page and fill the user-info slots.
//!
//! A fired redirect is terminal: nothing renders behind it and no further
//! gate logic runs for that page.

use api::{Role, Session, User};
use dioxus::prelude::*;

use crate::auth::use_auth;

/// Route literals that are not tied to a role. Role dashboards live on
/// [`Role::dashboard_path`].
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
}

/// What a page should do with the current visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Not signed in: go to the login page.
    ToLogin,
    /// Signed in but not allowed here: go to the visitor's own dashboard.
    ToDashboard(Role),
    /// Signed in and allowed: render the page.
    Allow,
}

/// Decide whether the current visitor may view a page restricted to
/// `allowed`. An empty allow-list admits any authenticated visitor.
pub fn evaluate_gate(session: Option<&Session>, allowed: &[Role]) -> GateOutcome {
    let Some(session) = session else {
        return GateOutcome::ToLogin;
    };
    let role = session.role();
    if !allowed.is_empty() && !allowed.contains(&role) {
        return GateOutcome::ToDashboard(role);
    }
    GateOutcome::Allow
}

/// Full-page redirect.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {path} requested off-wasm");
    }
}

/// Gate a page behind a set of allowed roles.
///
/// While the auth state is loading nothing renders; once it settles the
/// gate either redirects or shows `children` and populates the user-info
/// slots in the mounted markup.
#[component]
pub fn PageGate(
    #[props(default = Vec::new())] allowed_roles: Vec<Role>,
    children: Element,
) -> Element {
    let auth = use_auth();

    // Fill the slots only after the gate passes and the page is in the DOM.
    {
        let allowed = allowed_roles.clone();
        use_effect(move || {
            let state = auth();
            if state.loading {
                return;
            }
            if evaluate_gate(state.session.as_ref(), &allowed) == GateOutcome::Allow {
                if let Some(session) = state.session.as_ref() {
                    render_user_info(&session.user);
                }
            }
        });
    }

    let state = auth();
    if state.loading {
        return rsx! {};
    }

    match evaluate_gate(state.session.as_ref(), &allowed_roles) {
        GateOutcome::ToLogin => {
            redirect(paths::LOGIN);
            rsx! {}
        }
        GateOutcome::ToDashboard(role) => {
            redirect(role.dashboard_path());
            rsx! {}
        }
        GateOutcome::Allow => rsx! {
            {children}
        },
    }
}

/// Populate every `.user-name`, `.user-email`, and `.user-avatar` element
/// on the page with the visitor's details. One-to-many: a page may repeat
/// a slot (header and sidebar, say) and all copies are filled.
#[cfg(target_arch = "wasm32")]
pub fn render_user_info(user: &User) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    set_all_text(&document, ".user-name", &user.display_name());
    set_all_text(&document, ".user-email", &user.email);

    if let Ok(avatars) = document.query_selector_all(".user-avatar") {
        for index in 0..avatars.length() {
            if let Some(node) = avatars.item(index) {
                if let Some(img) = node.dyn_ref::<web_sys::HtmlImageElement>() {
                    img.set_src(user.avatar_url());
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn render_user_info(_user: &User) {}

#[cfg(target_arch = "wasm32")]
fn set_all_text(document: &web_sys::Document, selector: &str, value: &str) {
    if let Ok(nodes) = document.query_selector_all(selector) {
        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index) {
                node.set_text_content(Some(value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserMetadata;

    fn session(role: Option<Role>) -> Session {
        Session {
            access_token: "tok".to_string(),
            token_type: "bearer".to_string(),
            expires_at: None,
            refresh_token: None,
            user: User {
                id: "u1".to_string(),
                email: "ada@example.com".to_string(),
                user_metadata: UserMetadata {
                    role,
                    full_name: None,
                    avatar_url: None,
                },
            },
        }
    }

    #[test]
    fn test_no_session_goes_to_login() {
        assert_eq!(evaluate_gate(None, &[]), GateOutcome::ToLogin);
        assert_eq!(evaluate_gate(None, &[Role::Chef]), GateOutcome::ToLogin);
    }

    #[test]
    fn test_empty_allow_list_admits_any_role() {
        for role in Role::ALL {
            assert_eq!(
                evaluate_gate(Some(&session(Some(role))), &[]),
                GateOutcome::Allow
            );
        }
    }

    #[test]
    fn test_wrong_role_goes_to_own_dashboard() {
        let courier = session(Some(Role::Courier));
        assert_eq!(
            evaluate_gate(Some(&courier), &[Role::Chef]),
            GateOutcome::ToDashboard(Role::Courier)
        );
        assert_eq!(Role::Courier.dashboard_path(), "/courier-dashboard");
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let chef = session(Some(Role::Chef));
        assert_eq!(evaluate_gate(Some(&chef), &[Role::Chef]), GateOutcome::Allow);
        assert_eq!(
            evaluate_gate(Some(&chef), &[Role::Chef, Role::Courier]),
            GateOutcome::Allow
        );
    }

    #[test]
    fn test_missing_role_gates_as_consumer() {
        let no_role = session(None);
        assert_eq!(
            evaluate_gate(Some(&no_role), &[Role::Chef]),
            GateOutcome::ToDashboard(Role::Consumer)
        );
        assert_eq!(
            evaluate_gate(Some(&no_role), &[Role::Consumer]),
            GateOutcome::Allow
        );
    }
}
