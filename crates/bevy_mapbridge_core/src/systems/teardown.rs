//! Unmount observer.

use bevy::prelude::*;

use crate::components::{BridgeCreationFailed, BridgeState, MapProps, MapSurface};
use crate::store::SharedMapState;

/// Runs the bridge's destroy hook when `MapProps` is removed or its entity
/// despawned.
///
/// Releases the shared slot exactly once per mount, including mounts whose
/// creation failed.
pub fn on_map_props_removed(
    trigger: On<Remove, MapProps>,
    mut commands: Commands,
    mut store: ResMut<SharedMapState>,
    mut bridges: Query<(Option<&mut BridgeState>, Has<BridgeCreationFailed>)>,
) {
    let entity = trigger.event().entity;
    let Ok((state, failed)) = bridges.get_mut(entity) else {
        return;
    };

    match state {
        Some(mut state) => {
            info!("Tearing down map bridge '{}'", state.bridge.container_id());
            state.bridge.on_destroy(&mut store);
        }
        None if failed => store.remove_instance_ref(),
        None => return,
    }

    commands
        .entity(entity)
        .try_remove::<(BridgeState, MapSurface, BridgeCreationFailed)>();
}
