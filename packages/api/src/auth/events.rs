//! Auth-state-change notifications.
//!
//! The provider SDKs expose a "subscribe to auth state changes" hook; here
//! it is an explicit registry instead of a process-wide side effect. The
//! client emits [`AuthEvent::SignedIn`] after a successful credential
//! operation and [`AuthEvent::SignedOut`] after sign-out, and anything that
//! holds a clone of the [`AuthEvents`] handle can listen.

use std::cell::RefCell;
use std::rc::Rc;

use super::session::Session;

/// A change in the visitor's authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
}

/// Handle returned by [`AuthEvents::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(AuthEvent, Option<&Session>)>;

/// Registry of auth-state-change listeners. Cheap to clone; clones share
/// the same listener list.
#[derive(Clone, Default)]
pub struct AuthEvents {
    inner: Rc<RefCell<Registry>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it is called with every subsequent event and
    /// the session associated with it (if any).
    pub fn subscribe(&self, listener: impl FnMut(AuthEvent, Option<&Session>) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(listener_id, _)| *listener_id != id);
        inner.listeners.len() != before
    }

    pub(crate) fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        // Listeners may subscribe re-entrantly; don't hold the borrow while
        // dispatching.
        let mut listeners = std::mem::take(&mut self.inner.borrow_mut().listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(event, session);
        }
        let mut inner = self.inner.borrow_mut();
        let added = std::mem::take(&mut inner.listeners);
        inner.listeners = listeners;
        inner.listeners.extend(added);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_subscribers() {
        let events = AuthEvents::new();
        let seen = Rc::new(Cell::new(0u32));
        let seen_clone = seen.clone();
        events.subscribe(move |event, _| {
            assert_eq!(event, AuthEvent::SignedOut);
            seen_clone.set(seen_clone.get() + 1);
        });

        events.emit(AuthEvent::SignedOut, None);
        events.emit(AuthEvent::SignedOut, None);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_unsubscribed_listener_stops_receiving() {
        let events = AuthEvents::new();
        let seen = Rc::new(Cell::new(0u32));
        let seen_clone = seen.clone();
        let id = events.subscribe(move |_, _| seen_clone.set(seen_clone.get() + 1));

        events.emit(AuthEvent::SignedIn, None);
        assert!(events.unsubscribe(id));
        assert!(!events.unsubscribe(id));
        events.emit(AuthEvent::SignedIn, None);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_subscribe_during_dispatch_is_kept() {
        let events = AuthEvents::new();
        let seen = Rc::new(Cell::new(0u32));
        let seen_clone = seen.clone();
        let events_clone = events.clone();
        events.subscribe(move |_, _| {
            let late_seen = seen_clone.clone();
            events_clone.subscribe(move |_, _| late_seen.set(late_seen.get() + 1));
        });

        events.emit(AuthEvent::SignedIn, None);
        events.emit(AuthEvent::SignedIn, None);
        // The listener added during the first dispatch sees the second one.
        assert_eq!(seen.get(), 1);
    }
}
