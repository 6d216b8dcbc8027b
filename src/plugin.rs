//! Unified plugin for bevy_mapbridge.

use bevy::prelude::*;

use bevy_mapbridge_core::{MapBridgeConfig, MapBridgeCorePlugin, MapFactoryResource};
use bevy_mapbridge_engine::MapFactory;

#[cfg(feature = "controls")]
use bevy_mapbridge_controls::{MapControlsConfig, MapControlsPlugin};

/// Unified plugin that adds all enabled bevy_mapbridge functionality.
///
/// This plugin automatically includes:
/// - The lifecycle bridge ([`MapBridgeCorePlugin`])
/// - Enabled Layer 3 integrations based on feature flags
///
/// # Features
///
/// - `controls` (default): Adds [`MapControlsPlugin`] with the default installers
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_mapbridge::prelude::*;
/// use bevy_mapbridge::engine::headless::HeadlessFactory;
///
/// App::new()
///     .add_plugins(
///         MapBridgePlugin::default()
///             .with_core(MapBridgeConfig {
///                 id_prefix: "fleet-".into(),
///                 ..default()
///             })
///             .with_factory(HeadlessFactory::default()),
///     )
///     .run();
/// ```
#[derive(Default)]
pub struct MapBridgePlugin {
    /// Core configuration
    pub core: MapBridgeConfig,

    /// Factory for the shared instance, if not inserted by the app
    pub factory: Option<MapFactoryResource>,

    /// Installer configuration (if feature enabled)
    #[cfg(feature = "controls")]
    pub controls: MapControlsConfig,
}

impl MapBridgePlugin {
    /// Create with custom core configuration
    pub fn with_core(mut self, config: MapBridgeConfig) -> Self {
        self.core = config;
        self
    }

    /// Create with the factory that builds the shared instance
    pub fn with_factory(mut self, factory: impl MapFactory) -> Self {
        self.factory = Some(MapFactoryResource::new(factory));
        self
    }

    /// Create with custom installer configuration
    #[cfg(feature = "controls")]
    pub fn with_controls(mut self, config: MapControlsConfig) -> Self {
        self.controls = config;
        self
    }
}

impl Plugin for MapBridgePlugin {
    fn build(&self, app: &mut App) {
        // Layer 2: Core (always required)
        app.add_plugins(MapBridgeCorePlugin::new(self.core.clone()));

        if let Some(factory) = &self.factory {
            app.insert_resource(factory.clone());
        }

        // Layer 3: Installers (feature-gated)
        #[cfg(feature = "controls")]
        app.add_plugins(MapControlsPlugin::new(self.controls.clone()));

        info!("MapBridgePlugin initialized");
    }
}
