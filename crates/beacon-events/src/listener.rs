//! Listener trait and identity.

use std::fmt;
use std::sync::Arc;

/// Trait for synchronous listeners.
///
/// Implement this trait to react to a payload published under the kinds a
/// listener is subscribed to. Reactions run in the publisher's thread, so
/// `on_event` should return quickly. The payload is borrowed immutably; a
/// listener observes the entity, it never changes it.
pub trait Listener<P: ?Sized>: Send + Sync {
    /// Called once per notification of a kind this listener is subscribed to.
    fn on_event(&self, payload: &P);

    /// Optional name for debugging.
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// Identity of a shared listener instance.
///
/// Two handles compare equal exactly when they point at the same `Arc`
/// allocation. The dispatcher holds a strong reference to every registered
/// listener, so an id cannot be reused while its listener is subscribed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(usize);

impl ListenerId {
    /// Identity of the instance behind `listener`.
    #[must_use]
    pub fn of<L: ?Sized>(listener: &Arc<L>) -> Self {
        Self(Arc::as_ptr(listener).cast::<()>().addr())
    }
}

impl fmt::Debug for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListenerId({:#x})", self.0)
    }
}

/// A listener backed by a closure.
pub struct FnListener<F> {
    name: String,
    handler: F,
}

impl<F> FnListener<F> {
    /// Create a new closure listener.
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }
}

impl<F> fmt::Debug for FnListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<P, F> Listener<P> for FnListener<F>
where
    P: ?Sized,
    F: Fn(&P) + Send + Sync,
{
    fn on_event(&self, payload: &P) {
        (self.handler)(payload);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
