//! Transient toast notifications.
//!
//! A context-provided stack: pages push toasts, [`ToastHost`] renders them
//! bottom-right, and each toast removes itself after [`TOAST_DURATION`]
//! plus a short exit transition. Dismissal is keyed by id, so one toast
//! leaving never takes a neighbor with it.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;

use crate::format::sleep;

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);
/// Exit transition time before the element is dropped from the DOM.
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    pub fn accent_color(&self) -> &'static str {
        match self {
            ToastLevel::Success => "#10b981",
            ToastLevel::Error => "#ef4444",
            ToastLevel::Warning => "#f59e0b",
            ToastLevel::Info => "#3b82f6",
        }
    }

    fn class_suffix(&self) -> &'static str {
        match self {
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
            ToastLevel::Warning => "warning",
            ToastLevel::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    /// Set while the exit transition plays.
    pub leaving: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Add a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
            leaving: false,
        });
        id
    }

    /// Begin the exit transition for a toast. False if it is already
    /// leaving or gone.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id && !t.leaving) {
            Some(toast) => {
                toast.leaving = true;
                true
            }
            None => false,
        }
    }

    /// Drop a toast entirely. Idempotent.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// The toast stack provided at the app root.
pub fn use_toasts() -> Signal<ToastStack> {
    use_context::<Signal<ToastStack>>()
}

/// Push a toast and schedule its dismissal.
pub fn show_toast(mut toasts: Signal<ToastStack>, level: ToastLevel, message: impl Into<String>) {
    let id = toasts.write().push(level, message);
    spawn(async move {
        sleep(TOAST_DURATION).await;
        if toasts.write().begin_dismiss(id) {
            sleep(TOAST_EXIT).await;
            toasts.write().remove(id);
        }
    });
}

/// Provides the toast stack and renders it. Wrap the app once.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(ToastStack::default()));

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let toasts = use_toasts();
    let stack = toasts();

    rsx! {
        div { id: "toast-container",
            for toast in stack.toasts().iter().cloned() {
                ToastView { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast) -> Element {
    let suffix = toast.level.class_suffix();
    let accent = toast.level.accent_color();
    let icon = match toast.level {
        ToastLevel::Success => rsx! {
            Icon { icon: FaCircleCheck, width: 16, height: 16, fill: accent }
        },
        ToastLevel::Error => rsx! {
            Icon { icon: FaCircleExclamation, width: 16, height: 16, fill: accent }
        },
        ToastLevel::Warning => rsx! {
            Icon { icon: FaTriangleExclamation, width: 16, height: 16, fill: accent }
        },
        ToastLevel::Info => rsx! {
            Icon { icon: FaCircleInfo, width: 16, height: 16, fill: accent }
        },
    };

    rsx! {
        div {
            class: "toast toast-{suffix}",
            class: if toast.leaving { "toast-leaving" },
            style: "border-left-color: {accent};",
            {icon}
            span { "{toast.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastLevel::Info, "a");
        let second = stack.push(ToastLevel::Error, "b");
        assert!(second > first);
        assert_eq!(stack.toasts().len(), 2);
    }

    #[test]
    fn test_remove_takes_only_the_matching_toast() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastLevel::Info, "a");
        let second = stack.push(ToastLevel::Success, "b");

        assert!(stack.remove(first));
        let remaining: Vec<u64> = stack.toasts().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![second]);
    }

    #[test]
    fn test_dismiss_and_remove_are_idempotent() {
        let mut stack = ToastStack::default();
        let id = stack.push(ToastLevel::Warning, "careful");

        assert!(stack.begin_dismiss(id));
        assert!(!stack.begin_dismiss(id));
        assert!(stack.remove(id));
        assert!(!stack.remove(id));
        assert!(!stack.begin_dismiss(id));
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut stack = ToastStack::default();
        let first = stack.push(ToastLevel::Info, "a");
        stack.remove(first);
        let second = stack.push(ToastLevel::Info, "b");
        assert_ne!(first, second);
    }
}
