//! The bridge itself: lifecycle hooks tying props, store and instance together.

use std::collections::BTreeMap;

use bevy::prelude::*;
use bevy_mapbridge_engine::prelude::*;
use uuid::Uuid;

use super::installers::{InstallCall, InstalledSpecs, MapInstallers};
use super::ready::ReadySignal;
use super::registry::{EventCall, EventRegistry, RegistryKey};
use super::sync::{OptionCall, OptionSnapshot};
use crate::components::{MapProps, MapSurface};
use crate::error::BridgeError;
use crate::store::SharedMapState;

/// Where a bridge is in its life.
///
/// Normal order is `Uninitialized → Creating → Created → Ready → TornDown`.
/// A bridge that joins an existing instance skips `Creating`. When the shared
/// instance is replaced under a live bridge, it drops back to `Created` until
/// the new instance signals readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BridgePhase {
    Uninitialized,
    Creating,
    Created,
    Ready,
    TornDown,
}

/// How `on_create` obtained its instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The factory built a new instance, now published in the store.
    Created,
    /// The store already held an instance.
    Reused,
}

/// An imperative call planned by the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeCall {
    Option(OptionCall),
    Event(EventCall),
    Install(InstallCall),
}

/// Resolve the container id for a mount.
///
/// Uses the caller's id when given, otherwise a fresh `prefix` + v4 UUID.
pub fn resolve_container_id(provided: Option<&str>, prefix: &str) -> String {
    match provided {
        Some(id) => id.to_string(),
        None => format!("{prefix}{}", Uuid::new_v4()),
    }
}

/// Lifecycle bridge between declarative [`MapProps`] and a map instance.
///
/// Framework-agnostic: the hosting adapter calls the hooks and hands in the
/// store by reference.
///
/// - [`on_create`](Self::on_create) once on mount
/// - [`sync`](Self::sync), or [`on_instance_changed`](Self::on_instance_changed)
///   then [`on_props_changed`](Self::on_props_changed) + [`apply_calls`](Self::apply_calls),
///   whenever props or store change
/// - [`on_ready_signal`](Self::on_ready_signal) to poll the engine's ready event
/// - [`on_destroy`](Self::on_destroy) once on unmount
///
/// Everything the bridge records (attached handlers, applied option groups,
/// installed specs) belongs to the instance it is bound to. If the store
/// publishes a different instance, the records are dropped and rebuilt
/// against the new one.
pub struct MapBridge {
    container_id: String,
    phase: BridgePhase,
    ready_event: String,
    ready_signal: ReadySignal,
    ready_callback: EventCallback,
    bound: Option<MapHandle>,
    options: OptionSnapshot,
    registry: EventRegistry,
    installed: InstalledSpecs,
}

impl MapBridge {
    /// A bridge for `container_id` that listens for readiness on `ready_event`.
    pub fn new(container_id: impl Into<String>, ready_event: impl Into<String>) -> Self {
        let ready_signal = ReadySignal::default();
        let ready_callback = ready_signal.callback();
        Self {
            container_id: container_id.into(),
            phase: BridgePhase::Uninitialized,
            ready_event: ready_event.into(),
            ready_signal,
            ready_callback,
            bound: None,
            options: OptionSnapshot::default(),
            registry: EventRegistry::default(),
            installed: InstalledSpecs::default(),
        }
    }

    /// Mount hook: make sure an instance exists and is published.
    ///
    /// Builds one through `factory` when the store is empty. On failure the
    /// store is left untouched and the error is returned. Calling it again on
    /// a mounted bridge is a no-op; calling it after a failed or torn down
    /// mount is an error.
    pub fn on_create(
        &mut self,
        props: &MapProps,
        store: &mut SharedMapState,
        factory: Option<&dyn MapFactory>,
        default_init_options: &MapInitOptions,
    ) -> Result<CreateOutcome, BridgeError> {
        match self.phase {
            BridgePhase::Uninitialized => {}
            BridgePhase::Created | BridgePhase::Ready => return Ok(CreateOutcome::Reused),
            BridgePhase::Creating | BridgePhase::TornDown => {
                return Err(BridgeError::InvalidPhase(self.phase));
            }
        }

        if let Some(existing) = store.instance_ref() {
            self.bound = Some(existing.clone());
            self.phase = if store.is_ready() {
                BridgePhase::Ready
            } else {
                BridgePhase::Created
            };
            return Ok(CreateOutcome::Reused);
        }

        self.phase = BridgePhase::Creating;
        let factory = factory.ok_or(BridgeError::MissingFactory)?;
        let init_options = props.init_options.as_ref().unwrap_or(default_init_options);
        let handle = factory.create(&self.container_id, init_options)?;

        self.bound = Some(handle.clone());
        store.set_instance_ref(handle);
        self.phase = BridgePhase::Created;
        Ok(CreateOutcome::Created)
    }

    /// Rebind to the store's instance if it is not the one this bridge is
    /// bound to.
    ///
    /// Handlers are detached from the previous instance and every record is
    /// dropped, so the next sync re-attaches handlers, re-runs installers and
    /// re-applies option groups. Readiness is observed again from the new
    /// instance. Returns `true` when the bridge rebound.
    pub fn on_instance_changed(&mut self, store: &SharedMapState) -> bool {
        if !matches!(self.phase, BridgePhase::Created | BridgePhase::Ready) {
            return false;
        }
        let Some(current) = store.instance_ref() else {
            return false;
        };
        if self.bound.as_ref().is_some_and(|bound| bound.ptr_eq(current)) {
            return false;
        }

        if let Some(previous) = self.bound.take() {
            for call in self.registry.plan_detach_all() {
                call.apply(previous.events());
            }
            info!(
                "Map '{}' rebinding from instance '{}' to '{}'",
                self.container_id,
                previous.container_id(),
                current.container_id()
            );
        }

        self.ready_signal = ReadySignal::default();
        self.ready_callback = self.ready_signal.callback();
        self.options = OptionSnapshot::default();
        self.registry = EventRegistry::default();
        self.installed = InstalledSpecs::default();
        self.bound = Some(current.clone());
        self.phase = BridgePhase::Created;
        true
    }

    /// Change hook: plan the calls that bring the instance in line with `props`.
    ///
    /// Without an instance nothing is planned, and neither is anything while
    /// the store holds an instance this bridge has not rebound to yet. Event
    /// attachment and installers only need the instance; option groups also
    /// wait for readiness.
    pub fn on_props_changed(&self, props: &MapProps, store: &SharedMapState) -> Vec<BridgeCall> {
        if self.phase == BridgePhase::TornDown || !self.is_bound_to(store) {
            return Vec::new();
        }

        let mut calls: Vec<BridgeCall> = self
            .registry
            .plan(&self.desired_events(props))
            .into_iter()
            .map(BridgeCall::Event)
            .collect();

        calls.extend(self.installed.plan(props).into_iter().map(BridgeCall::Install));

        if store.is_ready() {
            calls.extend(self.options.plan(props).into_iter().map(BridgeCall::Option));
        }

        calls
    }

    /// Issue planned calls against the store's instance and record them.
    ///
    /// A missing or foreign instance makes this a no-op. Returns how many
    /// calls were issued.
    pub fn apply_calls(
        &mut self,
        calls: Vec<BridgeCall>,
        store: &SharedMapState,
        installers: &MapInstallers,
    ) -> usize {
        let Some(instance) = store.instance_ref().filter(|_| self.is_bound_to(store)) else {
            debug!("No map instance for '{}', deferring {} calls", self.container_id, calls.len());
            return 0;
        };

        let mut issued = 0;
        for call in calls {
            match &call {
                BridgeCall::Option(option) => {
                    option.apply(instance.engine());
                    self.options.commit(option);
                }
                BridgeCall::Event(event) => {
                    event.apply(instance.events());
                    self.registry.commit(event);
                }
                BridgeCall::Install(install) => {
                    if let Err(err) = install.run(instance, installers) {
                        warn!("Installer failed for '{}': {}", self.container_id, err);
                    }
                    self.installed.commit(install);
                }
            }
            debug!("'{}': {:?}", self.container_id, call);
            issued += 1;
        }
        issued
    }

    /// Rebind if needed, then plan and apply in one step.
    pub fn sync(
        &mut self,
        props: &MapProps,
        store: &SharedMapState,
        installers: &MapInstallers,
    ) -> usize {
        self.on_instance_changed(store);
        let calls = self.on_props_changed(props, store);
        self.apply_calls(calls, store, installers)
    }

    /// Ready hook: turn the first observed ready event into a store transition.
    ///
    /// Also moves to `Ready` when another bridge already raised the shared
    /// flag. Returns `true` exactly once per bound instance, on the transition.
    pub fn on_ready_signal(&mut self, store: &mut SharedMapState) -> bool {
        self.on_instance_changed(store);
        if self.phase != BridgePhase::Created || !self.is_bound_to(store) {
            return false;
        }
        if !store.is_ready() {
            if !self.ready_signal.is_fired() {
                return false;
            }
            store.set_ready(true);
        }
        self.phase = BridgePhase::Ready;
        true
    }

    /// Unmount hook: detach every callback and release the shared slot.
    ///
    /// Callbacks are only detached from the instance this bridge is bound to;
    /// if the slot was emptied or replaced meanwhile, detaching is skipped.
    /// Runs once; later calls do nothing.
    pub fn on_destroy(&mut self, store: &mut SharedMapState) {
        if self.phase == BridgePhase::TornDown {
            return;
        }

        let detaches = self.registry.plan_detach_all();
        if let Some(instance) = store.instance_ref().filter(|_| self.is_bound_to(store)) {
            for call in &detaches {
                call.apply(instance.events());
            }
        }
        for call in &detaches {
            self.registry.commit(call);
        }

        store.remove_instance_ref();
        self.bound = None;
        self.phase = BridgePhase::TornDown;
    }

    /// What the hosting entity should show right now.
    ///
    /// `Container` carries this bridge's own container id. A bridge that
    /// joined an existing instance reports its own id, not the id of the
    /// container hosting the instance; that one is
    /// `store.instance_ref().container_id()`.
    pub fn surface(&self, props: &MapProps, store: &SharedMapState) -> MapSurface {
        if self.phase != BridgePhase::TornDown && store.is_available() && self.is_bound_to(store) {
            MapSurface::Container {
                id: self.container_id.clone(),
            }
        } else {
            MapSurface::pending(props.loader)
        }
    }

    fn is_bound_to(&self, store: &SharedMapState) -> bool {
        match (&self.bound, store.instance_ref()) {
            (Some(bound), Some(current)) => bound.ptr_eq(current),
            _ => false,
        }
    }

    fn desired_events(&self, props: &MapProps) -> BTreeMap<RegistryKey, EventCallback> {
        let mut desired: BTreeMap<RegistryKey, EventCallback> = props
            .events
            .iter()
            .map(|(name, callback)| (RegistryKey::User(name.clone()), callback.clone()))
            .collect();
        desired.insert(
            RegistryKey::Internal(self.ready_event.clone()),
            self.ready_callback.clone(),
        );
        desired
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn phase(&self) -> BridgePhase {
        self.phase
    }

    /// The instance this bridge last bound to.
    pub fn bound_instance(&self) -> Option<&MapHandle> {
        self.bound.as_ref()
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn options(&self) -> &OptionSnapshot {
        &self.options
    }

    /// The internal handler attached under the ready event.
    pub fn ready_callback(&self) -> &EventCallback {
        &self.ready_callback
    }
}
