//! In-memory engine with no rendering.
//!
//! Keeps the current option groups, attached listeners, sprites and controls
//! in memory and records every call it receives. Useful for servers that need
//! the bridge without a display, and for asserting on call sequences.
//!
//! # Example
//!
//! ```rust
//! use bevy_mapbridge_engine::headless::{EngineCall, HeadlessFactory};
//! use bevy_mapbridge_engine::prelude::*;
//!
//! let factory = HeadlessFactory::default();
//! let handle = factory.create("map-1", &MapInitOptions::default()).unwrap();
//! handle.set_camera(Some(&CameraOptions { zoom: Some(3.0), ..Default::default() }));
//!
//! let engine = factory.last_engine().unwrap();
//! assert_eq!(engine.count(|call| matches!(call, EngineCall::SetCamera(_))), 1);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::callback::{EventCallback, MapEvent};
use crate::engine::{ControlManager, ImageSpriteManager, MapEngine, MapEvents, MapFactory, MapHandle};
use crate::error::EngineError;
use crate::features::{ControlOptions, ImageSpriteSpec, MapControl};
use crate::options::{CameraOptions, MapInitOptions, TrafficOptions, UserInteractionOptions};

/// One call received by a [`HeadlessEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    SetTraffic(Option<TrafficOptions>),
    SetUserInteraction(Option<UserInteractionOptions>),
    SetCamera(Option<CameraOptions>),
    AddListener(String),
    RemoveListener(String),
    AddSprite(String),
    AddControl(String),
}

#[derive(Default)]
struct HeadlessState {
    traffic: Option<TrafficOptions>,
    user_interaction: Option<UserInteractionOptions>,
    camera: Option<CameraOptions>,
    listeners: Vec<(String, EventCallback)>,
    sprites: Vec<ImageSpriteSpec>,
    controls: Vec<(MapControl, ControlOptions)>,
    log: Vec<EngineCall>,
}

/// Engine that keeps everything in memory.
#[derive(Default)]
pub struct HeadlessEngine {
    state: Mutex<HeadlessState>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, HeadlessState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fire `name` on every listener attached under that name.
    ///
    /// Listeners are collected before being invoked, so a callback may
    /// attach or detach listeners on this engine.
    pub fn emit(&self, name: &str, payload: serde_json::Value) {
        let targets: Vec<EventCallback> = self
            .state()
            .listeners
            .iter()
            .filter(|(listener, _)| listener == name)
            .map(|(_, callback)| callback.clone())
            .collect();

        let event = MapEvent::new(name, payload);
        for callback in targets {
            callback.call(&event);
        }
    }

    /// Shorthand for emitting the conventional `"ready"` event.
    pub fn fire_ready(&self) {
        self.emit("ready", serde_json::Value::Null);
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.state().log.clone()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&EngineCall) -> bool) -> usize {
        self.state().log.iter().filter(|call| predicate(call)).count()
    }

    /// Values passed to `set_traffic`, in order.
    pub fn traffic_calls(&self) -> Vec<Option<TrafficOptions>> {
        self.state()
            .log
            .iter()
            .filter_map(|call| match call {
                EngineCall::SetTraffic(options) => Some(options.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn traffic(&self) -> Option<TrafficOptions> {
        self.state().traffic.clone()
    }

    pub fn user_interaction(&self) -> Option<UserInteractionOptions> {
        self.state().user_interaction.clone()
    }

    pub fn camera(&self) -> Option<CameraOptions> {
        self.state().camera.clone()
    }

    /// Number of listeners currently attached under `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.state()
            .listeners
            .iter()
            .filter(|(listener, _)| listener == name)
            .count()
    }

    /// Total number of listeners currently attached.
    pub fn total_listeners(&self) -> usize {
        self.state().listeners.len()
    }

    /// Whether `callback` is attached under `name`.
    pub fn has_listener(&self, name: &str, callback: &EventCallback) -> bool {
        self.state()
            .listeners
            .iter()
            .any(|(listener, attached)| listener == name && attached.ptr_eq(callback))
    }

    pub fn sprite_ids(&self) -> Vec<String> {
        self.state().sprites.iter().map(|s| s.id.clone()).collect()
    }

    pub fn control_labels(&self) -> Vec<String> {
        self.state()
            .controls
            .iter()
            .map(|(control, _)| control.label())
            .collect()
    }
}

impl MapEngine for HeadlessEngine {
    fn set_traffic(&self, options: Option<&TrafficOptions>) {
        let mut state = self.state();
        state.traffic = options.cloned();
        state.log.push(EngineCall::SetTraffic(options.cloned()));
    }

    fn set_user_interaction(&self, options: Option<&UserInteractionOptions>) {
        let mut state = self.state();
        state.user_interaction = options.cloned();
        state.log.push(EngineCall::SetUserInteraction(options.cloned()));
    }

    fn set_camera(&self, options: Option<&CameraOptions>) {
        let mut state = self.state();
        state.camera = options.cloned();
        state.log.push(EngineCall::SetCamera(options.cloned()));
    }

    fn events(&self) -> &dyn MapEvents {
        self
    }

    fn image_sprites(&self) -> &dyn ImageSpriteManager {
        self
    }

    fn controls(&self) -> &dyn ControlManager {
        self
    }
}

impl MapEvents for HeadlessEngine {
    fn add(&self, name: &str, callback: &EventCallback) {
        let mut state = self.state();
        state.listeners.push((name.to_string(), callback.clone()));
        state.log.push(EngineCall::AddListener(name.to_string()));
    }

    fn remove(&self, name: &str, callback: &EventCallback) {
        let mut state = self.state();
        if let Some(index) = state
            .listeners
            .iter()
            .position(|(listener, attached)| listener == name && attached.ptr_eq(callback))
        {
            state.listeners.remove(index);
        }
        state.log.push(EngineCall::RemoveListener(name.to_string()));
    }
}

impl ImageSpriteManager for HeadlessEngine {
    fn has(&self, id: &str) -> bool {
        self.state().sprites.iter().any(|sprite| sprite.id == id)
    }

    fn add(&self, sprite: &ImageSpriteSpec) -> Result<(), EngineError> {
        if sprite.id.is_empty() {
            return Err(EngineError::Sprite(
                sprite.id.clone(),
                "sprite id must not be empty".to_string(),
            ));
        }
        let mut state = self.state();
        state.sprites.push(sprite.clone());
        state.log.push(EngineCall::AddSprite(sprite.id.clone()));
        Ok(())
    }
}

impl ControlManager for HeadlessEngine {
    fn add(&self, control: MapControl, options: &ControlOptions) -> Result<(), EngineError> {
        let mut state = self.state();
        state.log.push(EngineCall::AddControl(control.label()));
        state.controls.push((control, options.clone()));
        Ok(())
    }
}

#[derive(Default)]
struct FactoryState {
    created: Vec<(String, MapInitOptions)>,
    engines: Vec<Arc<HeadlessEngine>>,
    failure: Option<String>,
}

/// Factory producing [`HeadlessEngine`] instances.
///
/// Clones share state, so a test can keep one clone and hand another to the
/// bridge.
#[derive(Clone, Default)]
pub struct HeadlessFactory {
    state: Arc<Mutex<FactoryState>>,
}

impl HeadlessFactory {
    /// A factory whose `create` always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let factory = Self::default();
        factory.lock().failure = Some(reason.into());
        factory
    }

    fn lock(&self) -> MutexGuard<'_, FactoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Container ids and options of every successful `create`, in order.
    pub fn created(&self) -> Vec<(String, MapInitOptions)> {
        self.lock().created.clone()
    }

    /// Number of `create` calls that produced an instance.
    pub fn create_count(&self) -> usize {
        self.lock().created.len()
    }

    /// The most recently created engine.
    pub fn last_engine(&self) -> Option<Arc<HeadlessEngine>> {
        self.lock().engines.last().cloned()
    }
}

impl MapFactory for HeadlessFactory {
    fn create(
        &self,
        container_id: &str,
        options: &MapInitOptions,
    ) -> Result<MapHandle, EngineError> {
        let mut state = self.lock();
        if let Some(reason) = &state.failure {
            return Err(EngineError::Creation {
                container_id: container_id.to_string(),
                reason: reason.clone(),
            });
        }

        let engine = Arc::new(HeadlessEngine::new());
        state
            .created
            .push((container_id.to_string(), options.clone()));
        state.engines.push(engine.clone());

        Ok(MapHandle::new(container_id, engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_reaches_only_matching_listeners() {
        let engine = HeadlessEngine::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let on_click = EventCallback::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        engine.events().add("click", &on_click);
        engine.emit("click", serde_json::Value::Null);
        engine.emit("data", serde_json::Value::Null);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_detaches_only_identical_callback() {
        let engine = HeadlessEngine::new();
        let first = EventCallback::new(|_| {});
        let second = EventCallback::new(|_| {});

        engine.events().add("click", &first);
        engine.events().add("click", &second);
        engine.events().remove("click", &first);

        assert_eq!(engine.listener_count("click"), 1);
        assert!(engine.has_listener("click", &second));
        assert!(!engine.has_listener("click", &first));
    }

    #[test]
    fn test_factory_failure_creates_nothing() {
        let factory = HeadlessFactory::failing("no GPU");
        let result = factory.create("map-x", &MapInitOptions::default());

        assert!(matches!(result, Err(EngineError::Creation { .. })));
        assert_eq!(factory.create_count(), 0);
        assert!(factory.last_engine().is_none());
    }

    #[test]
    fn test_setters_record_values() {
        let engine = HeadlessEngine::new();
        let traffic = TrafficOptions {
            incidents: true,
            ..Default::default()
        };

        engine.set_traffic(Some(&traffic));
        engine.set_traffic(None);

        assert_eq!(engine.traffic_calls(), vec![Some(traffic), None]);
        assert_eq!(engine.traffic(), None);
    }
}
