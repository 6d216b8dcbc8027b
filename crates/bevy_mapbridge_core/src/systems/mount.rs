//! Mount system: runs the bridge's create hook for new `MapProps`.

use bevy::prelude::*;

use crate::bridge::{BridgePhase, CreateOutcome, MapBridge, resolve_container_id};
use crate::components::{BridgeCreationFailed, BridgeState, MapProps, MapSurface};
use crate::events::{MapCreated, MapCreationFailed, MapReady};
use crate::plugin::{MapBridgeConfig, MapFactoryResource};
use crate::store::SharedMapState;

/// Mounts a bridge on every entity that gained `MapProps`.
///
/// Runs in `PreUpdate`. Entities mounted in the same frame share one
/// instance: the first creates it, the rest join it.
///
/// # Triggers
///
/// - [`MapCreated`] when a new instance was published
/// - [`MapReady`] when joining an instance that is already ready
/// - [`MapCreationFailed`] when the factory refused
pub fn mount_bridges(
    mut commands: Commands,
    config: Res<MapBridgeConfig>,
    factory: Option<Res<MapFactoryResource>>,
    mut store: ResMut<SharedMapState>,
    new_maps: Query<(Entity, &MapProps), (Without<BridgeState>, Without<BridgeCreationFailed>)>,
) {
    let factory = factory.as_ref().map(|resource| resource.factory());

    for (entity, props) in &new_maps {
        let container_id = resolve_container_id(props.provided_map_id.as_deref(), &config.id_prefix);
        let mut bridge = MapBridge::new(container_id.clone(), config.ready_event.clone());

        match bridge.on_create(props, &mut store, factory, &config.default_init_options) {
            Ok(outcome) => {
                debug!("Mounted map bridge {:?} in '{}' ({:?})", entity, container_id, outcome);
                let surface = bridge.surface(props, &store);
                let ready = bridge.phase() == BridgePhase::Ready;
                commands
                    .entity(entity)
                    .insert((BridgeState::new(bridge), surface));

                if outcome == CreateOutcome::Created {
                    info!("Created map instance in '{}'", container_id);
                    let id = container_id.clone();
                    commands
                        .entity(entity)
                        .trigger(|entity| MapCreated { entity, container_id: id });
                }
                if ready {
                    commands
                        .entity(entity)
                        .trigger(|entity| MapReady { entity, container_id });
                }
            }
            Err(error) => {
                error!("Failed to create map for {:?} in '{}': {}", entity, container_id, error);
                commands
                    .entity(entity)
                    .insert((BridgeCreationFailed, MapSurface::pending(props.loader)))
                    .trigger(|entity| MapCreationFailed { entity, error });
            }
        }
    }
}
