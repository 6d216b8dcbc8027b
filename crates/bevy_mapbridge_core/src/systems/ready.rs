//! Readiness polling.

use bevy::prelude::*;

use crate::components::BridgeState;
use crate::events::MapReady;
use crate::store::SharedMapState;

/// Turns observed engine ready events into store transitions.
///
/// The engine may fire its ready event from any thread; the bridge's signal
/// is polled here so the store is only written from the schedule. Each bridge
/// fires [`MapReady`] once.
pub fn poll_ready_signals(
    mut commands: Commands,
    mut store: ResMut<SharedMapState>,
    mut bridges: Query<(Entity, &mut BridgeState)>,
) {
    for (entity, mut state) in &mut bridges {
        if !state.bridge.on_ready_signal(&mut store) {
            continue;
        }

        let container_id = state.bridge.container_id().to_string();
        info!("Map '{}' is ready", container_id);
        commands
            .entity(entity)
            .trigger(|entity| MapReady { entity, container_id });
    }
}
