//! Prop synchronization and surface updates.

use bevy::prelude::*;

use crate::bridge::MapInstallers;
use crate::components::{BridgeState, MapProps, MapSurface};
use crate::store::SharedMapState;

/// Brings each instance in line with its bridge's props.
///
/// A bridge is re-synced when its props changed or the store moved on since
/// its last sync. Only the groups that differ produce engine calls.
pub fn sync_bridges(
    store: Res<SharedMapState>,
    installers: Res<MapInstallers>,
    mut bridges: Query<(Ref<MapProps>, &mut BridgeState)>,
) {
    let revision = store.revision();

    for (props, mut state) in &mut bridges {
        if !props.is_changed() && state.seen_revision == Some(revision) {
            continue;
        }

        let issued = state.bridge.sync(&props, &store, &installers);
        if issued > 0 {
            trace!("Synced '{}' with {} calls", state.bridge.container_id(), issued);
        }
        state.seen_revision = Some(revision);
    }
}

/// Keeps `MapSurface` on each bridged entity current.
///
/// Only writes when the surface actually changes so `Changed<MapSurface>`
/// stays meaningful for renderers.
pub fn update_surfaces(
    store: Res<SharedMapState>,
    mut bridges: Query<(&MapProps, &BridgeState, &mut MapSurface)>,
) {
    for (props, state, mut surface) in &mut bridges {
        let next = state.bridge.surface(props, &store);
        surface.set_if_neq(next);
    }
}
