//! Event callbacks attached to an engine's event subsystem.

use std::fmt;
use std::sync::Arc;

/// An event fired by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEvent {
    /// Event name, e.g. `"ready"`, `"click"`, `"data"`
    pub name: String,
    /// Engine-specific payload
    pub payload: serde_json::Value,
}

impl MapEvent {
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

/// A shareable event callback.
///
/// Two callbacks are equal when they point at the same closure. Cloning keeps
/// the identity, so a callback stored in props and the one attached to the
/// engine compare equal until the caller supplies a new closure.
#[derive(Clone)]
pub struct EventCallback(Arc<dyn Fn(&MapEvent) + Send + Sync>);

impl EventCallback {
    pub fn new(f: impl Fn(&MapEvent) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self, event: &MapEvent) {
        (self.0)(event);
    }

    /// Whether both callbacks share the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for EventCallback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for EventCallback {}

impl fmt::Debug for EventCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventCallback")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
