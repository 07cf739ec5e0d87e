//! Local storage slot for the provider-issued session.
//!
//! In the browser the session lives in `window.localStorage` so it survives
//! the full-page redirects between login and the dashboards. Off-wasm (unit
//! tests) a thread-local slot stands in for it.

/// Storage key for the provider session payload.
pub const SESSION_STORAGE_KEY: &str = "freshplate.auth.session";

#[cfg(target_arch = "wasm32")]
pub(crate) fn load_raw() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(SESSION_STORAGE_KEY).ok()?
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn store_raw(value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(err) = storage.set_item(SESSION_STORAGE_KEY, value) {
            tracing::error!("failed to persist session: {err:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn clear() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static SLOT: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn load_raw() -> Option<String> {
    SLOT.with(|slot| slot.borrow().clone())
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn store_raw(value: &str) {
    SLOT.with(|slot| *slot.borrow_mut() = Some(value.to_string()));
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn clear() {
    SLOT.with(|slot| *slot.borrow_mut() = None);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        store_raw("payload");
        assert_eq!(load_raw().as_deref(), Some("payload"));
        clear();
        assert_eq!(load_raw(), None);
    }
}
