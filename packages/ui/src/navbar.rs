//! Responsive top navigation.
//!
//! The burger button toggles the `active`/`toggle` classes the stylesheet
//! animates, and mirrors the open state onto `<body>` as `menu-open` so
//! the page behind the menu stops scrolling. Clicking anything inside the
//! menu closes it again.

use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    let mut open = use_signal(|| false);

    use_effect(move || set_menu_open(open()));

    rsx! {
        header { class: "site-header",
            nav { class: "navbar",
                a { class: "logo", href: "/", "FreshPlate" }
                div {
                    class: "nav-links",
                    class: if open() { "active" },
                    onclick: move |_| open.set(false),
                    {children}
                }
                button {
                    class: "burger-menu",
                    class: if open() { "toggle" },
                    aria_label: "Toggle navigation",
                    onclick: move |_| {
                        let next = !open();
                        open.set(next);
                    },
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn set_menu_open(open: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if open {
        classes.add_1("menu-open")
    } else {
        classes.remove_1("menu-open")
    };
    if let Err(err) = result {
        tracing::error!("failed to toggle menu-open on body: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_menu_open(_open: bool) {}
