//! Plugin for `bevy_mapbridge_core`.

use std::sync::Arc;

use bevy::prelude::*;
use bevy_mapbridge_engine::prelude::*;

use crate::bridge::MapInstallers;
use crate::store::SharedMapState;
use crate::systems::{
    mount_bridges, on_map_props_removed, poll_ready_signals, sync_bridges, update_surfaces,
};

/// Configuration for `MapBridgeCorePlugin`.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_mapbridge_core::{MapBridgeConfig, MapBridgeCorePlugin};
///
/// App::new().add_plugins(MapBridgeCorePlugin::new(MapBridgeConfig {
///     id_prefix: "fleet-map-".into(),
///     ..Default::default()
/// }));
/// ```
#[derive(Resource, Debug, Clone)]
pub struct MapBridgeConfig {
    /// Prefix for generated container ids.
    pub id_prefix: String,
    /// Engine event that signals readiness.
    pub ready_event: String,
    /// Init options used when `MapProps::init_options` is unset.
    pub default_init_options: MapInitOptions,
}

impl Default for MapBridgeConfig {
    fn default() -> Self {
        Self {
            id_prefix: "map-".to_string(),
            ready_event: "ready".to_string(),
            default_init_options: MapInitOptions::default(),
        }
    }
}

/// The factory used to create the shared instance.
#[derive(Resource, Clone)]
pub struct MapFactoryResource(pub Arc<dyn MapFactory>);

impl MapFactoryResource {
    pub fn new(factory: impl MapFactory) -> Self {
        Self(Arc::new(factory))
    }

    pub fn factory(&self) -> &dyn MapFactory {
        self.0.as_ref()
    }
}

/// Systems run by the bridge each frame, in `PreUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapBridgeSystems;

/// Plugin driving map bridges from `MapProps` components.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_mapbridge_core::prelude::*;
/// use bevy_mapbridge_engine::headless::HeadlessFactory;
///
/// App::new()
///     .add_plugins(MapBridgeCorePlugin::default().with_factory(HeadlessFactory::default()))
///     .add_systems(Startup, |mut commands: Commands| {
///         commands.spawn(MapProps::default().with_map_id("fleet"));
///     })
///     .run();
/// ```
#[derive(Default)]
pub struct MapBridgeCorePlugin {
    config: MapBridgeConfig,
    factory: Option<Arc<dyn MapFactory>>,
}

impl MapBridgeCorePlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: MapBridgeConfig) -> Self {
        Self {
            config,
            factory: None,
        }
    }

    /// Register the factory that creates the shared instance.
    ///
    /// Without one, `MapFactoryResource` must be inserted by the app before
    /// the first `MapProps` is mounted.
    pub fn with_factory(mut self, factory: impl MapFactory) -> Self {
        self.factory = Some(Arc::new(factory));
        self
    }
}

impl Plugin for MapBridgeCorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        app.init_resource::<SharedMapState>();
        app.init_resource::<MapInstallers>();

        if let Some(factory) = &self.factory {
            app.insert_resource(MapFactoryResource(factory.clone()));
        }

        // Mounting runs first so bridges spawned this frame sync this frame
        app.add_systems(
            PreUpdate,
            (mount_bridges, poll_ready_signals, sync_bridges, update_surfaces)
                .chain()
                .in_set(MapBridgeSystems),
        );

        app.add_observer(on_map_props_removed);

        info!(
            "MapBridgeCorePlugin ready (id prefix '{}', ready event '{}')",
            self.config.id_prefix, self.config.ready_event
        );
    }
}
