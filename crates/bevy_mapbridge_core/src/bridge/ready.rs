//! One-shot readiness signal fed by the engine's ready event.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bevy_mapbridge_engine::callback::EventCallback;

/// Flag raised by the engine's ready event.
///
/// The engine may fire the event from any thread and any number of times; the
/// flag only ever goes from unset to set. The bridge polls it and turns the
/// first observation into a store transition.
#[derive(Debug, Clone, Default)]
pub struct ReadySignal {
    fired: Arc<AtomicBool>,
}

impl ReadySignal {
    /// Callback to attach under the engine's ready event.
    ///
    /// Every call returns a new closure; keep the one you attach so it can
    /// be detached later.
    pub fn callback(&self) -> EventCallback {
        let fired = self.fired.clone();
        EventCallback::new(move |_| {
            fired.store(true, Ordering::Release);
        })
    }

    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}
