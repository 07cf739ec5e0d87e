//! Scroll behaviors: smooth in-page anchors, one-shot reveal animations,
//! and a throttled back-to-top button.

use dioxus::prelude::*;
use std::collections::HashSet;

/// Height of the fixed page header; anchor scrolling compensates for it
/// so targets land below the header instead of under it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Elements carrying this class animate in the first time they scroll
/// into view.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Extract the selector from an in-page anchor href. Bare `#` and
/// non-anchor hrefs yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(_) => Some(href),
    }
}

/// Where to scroll so an element at `element_top` (viewport-relative)
/// lands just under the fixed header.
pub fn scroll_offset(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET
}

/// Smoothly scroll to the element an anchor href points at.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_anchor(href: &str) {
    let Some(selector) = anchor_target(href) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(Some(element)) = document.query_selector(selector) else {
        return;
    };

    let top = element.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);

    let options = web_sys::ScrollToOptions::new();
    options.set_top(scroll_offset(top, page_y));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_anchor(_href: &str) {}

/// Anchor that scrolls smoothly instead of jumping.
#[component]
pub fn AnchorLink(
    to: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let target = to.clone();
    rsx! {
        a {
            class: "{class}",
            href: "{to}",
            onclick: move |evt| {
                evt.prevent_default();
                scroll_to_anchor(&target);
            },
            {children}
        }
    }
}

/// Tracks which elements have already been revealed so each animates at
/// most once, no matter how many intersection callbacks fire for it.
#[derive(Debug, Default)]
pub struct RevealState {
    revealed: HashSet<String>,
}

impl RevealState {
    /// Mark an element revealed. True the first time only.
    pub fn mark(&mut self, key: &str) -> bool {
        self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

/// Observe every `.reveal` element and add `visible` the first time it
/// enters the viewport; revealed elements are unobserved immediately.
#[cfg(target_arch = "wasm32")]
pub fn init_scroll_reveal() {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(elements) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    if elements.length() == 0 {
        return;
    }

    let state = Rc::new(RefCell::new(RevealState::default()));

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let key = target.get_attribute("data-reveal-key").unwrap_or_default();
                if state.borrow_mut().mark(&key) {
                    let _ = target.class_list().add_1("visible");
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) else {
        return;
    };

    for index in 0..elements.length() {
        if let Some(node) = elements.item(index) {
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                let _ = element.set_attribute("data-reveal-key", &index.to_string());
                observer.observe(&element);
            }
        }
    }

    // observer and callback live for the rest of the page
    callback.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_scroll_reveal() {}

/// Wire up scroll reveal for the current page after it mounts.
pub fn use_scroll_reveal() {
    use_effect(|| init_scroll_reveal());
}

/// Floating button that appears once the page is scrolled past the fold
/// and smoothly returns to the top. Scroll events are throttled.
#[component]
pub fn BackToTop() -> Element {
    let visible = use_signal(|| false);

    use_effect(move || watch_scroll(visible));

    rsx! {
        if visible() {
            button {
                class: "back-to-top",
                aria_label: "Back to top",
                onclick: move |_| scroll_to_top(),
                "↑"
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn watch_scroll(mut visible: Signal<bool>) {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let mut gate = crate::format::Throttle::new(200.0);
    let win = window.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        if !gate.should_fire(crate::format::now_ms()) {
            return;
        }
        let past_fold = win.page_y_offset().unwrap_or(0.0) > 400.0;
        if visible() != past_fold {
            visible.set(past_fold);
        }
    });
    if window
        .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::error!("failed to attach scroll listener");
    }
    handler.forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_scroll(_visible: Signal<bool>) {}

#[cfg(target_arch = "wasm32")]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_top() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#features"), Some("#features"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/login"), None);
    }

    #[test]
    fn test_scroll_offset_compensates_for_header() {
        // element 500px below the viewport top, page already scrolled 120px
        assert_eq!(scroll_offset(500.0, 120.0), 540.0);
    }

    #[test]
    fn test_reveal_fires_at_most_once_per_element() {
        let mut state = RevealState::default();
        assert!(state.mark("3"));
        assert!(!state.mark("3"));
        assert!(state.is_revealed("3"));
        assert!(state.mark("4"));
    }
}
