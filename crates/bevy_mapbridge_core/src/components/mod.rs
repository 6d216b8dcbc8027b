//! Components attached to bridged map entities.

pub mod props;
pub mod surface;

use bevy::prelude::*;

use crate::bridge::MapBridge;

pub use props::{MapEventHandlers, MapLoader, MapProps};
pub use surface::MapSurface;

/// Per-entity bridge state, inserted once the bridge has mounted.
///
/// Holds the option snapshot, event registry and readiness signal. Dropped
/// with the entity or when `MapProps` is removed.
#[derive(Component)]
pub struct BridgeState {
    pub bridge: MapBridge,
    /// Store revision seen by the last sync.
    pub(crate) seen_revision: Option<u64>,
}

impl BridgeState {
    pub fn new(bridge: MapBridge) -> Self {
        Self {
            bridge,
            seen_revision: None,
        }
    }
}

/// Marker for entities whose instance could not be created.
///
/// Creation is not retried while this marker is present.
#[derive(Component, Debug)]
pub struct BridgeCreationFailed;
