//! The shared map store.
//!
//! One [`SharedMapState`] exists per app. Bridges publish the instance they
//! create into it; descendant controls only read from it.

use bevy::prelude::*;
use bevy_mapbridge_engine::MapHandle;

/// Shared slot holding the live map instance and its readiness flag.
///
/// Single writer per field: the bridge that mounts against an empty slot
/// writes `instance_ref`, its readiness signal writes `is_ready`, and its
/// unmount clears both. Everything else reads.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_mapbridge_core::store::SharedMapState;
/// fn follow_map(store: Res<SharedMapState>) {
///     if let Some(map) = store.instance_ref().filter(|_| store.is_ready()) {
///         info!("map in '{}' is live", map.container_id());
///     }
/// }
/// ```
#[derive(Resource, Default, Debug)]
pub struct SharedMapState {
    instance: Option<MapHandle>,
    ready: bool,
    revision: u64,
}

impl SharedMapState {
    pub fn instance_ref(&self) -> Option<&MapHandle> {
        self.instance.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether an instance exists and has signaled readiness.
    pub fn is_available(&self) -> bool {
        self.ready && self.instance.is_some()
    }

    /// Mutation counter, bumped by every effective mutator call.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Publish `handle` as the shared instance.
    ///
    /// Publishing a different instance over a live one resets readiness.
    pub fn set_instance_ref(&mut self, handle: MapHandle) {
        if let Some(existing) = &self.instance {
            if existing.ptr_eq(&handle) {
                return;
            }
            warn!(
                "Replacing live map instance '{}' with '{}'",
                existing.container_id(),
                handle.container_id()
            );
        }
        self.instance = Some(handle);
        self.ready = false;
        self.revision += 1;
    }

    /// Set the readiness flag.
    ///
    /// Repeating the current value is a no-op. Readiness cannot be raised
    /// while the slot is empty.
    pub fn set_ready(&mut self, ready: bool) {
        if self.ready == ready {
            return;
        }
        if ready && self.instance.is_none() {
            warn!("Ignoring map readiness: no instance is published");
            return;
        }
        self.ready = ready;
        self.revision += 1;
    }

    /// Release the shared instance and clear readiness.
    pub fn remove_instance_ref(&mut self) {
        self.instance = None;
        self.ready = false;
        self.revision += 1;
    }
}
