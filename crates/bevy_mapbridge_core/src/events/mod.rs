//! Lifecycle events fired on bridged map entities.
//!
//! All of these are `EntityEvent`s and can be observed on the entity that
//! carries the `MapProps`.

use bevy::prelude::*;

use crate::error::BridgeError;

/// Fired when the bridge built a new instance and published it.
///
/// Not fired for bridges that joined an existing instance.
#[derive(EntityEvent, Debug, Clone)]
pub struct MapCreated {
    #[event_target]
    pub entity: Entity,
    /// Container the instance was created in
    pub container_id: String,
}

/// Fired once per bridge when the shared map becomes ready.
///
/// Fires again if the shared instance is replaced and the new one becomes
/// ready.
///
/// # Example
///
/// ```ignore
/// commands.spawn(MapProps::default())
///     .observe(|trigger: On<MapReady>| {
///         info!("Map ready in '{}'", trigger.event().container_id);
///     });
/// ```
#[derive(EntityEvent, Debug, Clone)]
pub struct MapReady {
    #[event_target]
    pub entity: Entity,
    pub container_id: String,
}

/// Fired when the factory failed to build an instance.
///
/// The store is left empty and creation is not retried for this entity.
#[derive(EntityEvent, Debug, Clone)]
pub struct MapCreationFailed {
    #[event_target]
    pub entity: Entity,
    pub error: BridgeError,
}
