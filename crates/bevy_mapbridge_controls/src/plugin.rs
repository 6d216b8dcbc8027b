//! Plugin registering the default installers.

use std::sync::Arc;

use bevy::prelude::*;
use bevy_mapbridge_core::bridge::MapInstallers;

use crate::controls::{install_controls, install_custom_controls};
use crate::sprites::install_image_sprites;

/// Which default installers `MapControlsPlugin` registers.
///
/// Disabling one leaves its slot in [`MapInstallers`] untouched, so apps can
/// plug their own installer in.
#[derive(Resource, Debug, Clone)]
pub struct MapControlsConfig {
    pub image_sprites: bool,
    pub controls: bool,
    pub custom_controls: bool,
}

impl Default for MapControlsConfig {
    fn default() -> Self {
        Self {
            image_sprites: true,
            controls: true,
            custom_controls: true,
        }
    }
}

/// Plugin that installs image sprites and controls on the shared map.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_mapbridge_controls::{MapControlsConfig, MapControlsPlugin};
///
/// App::new().add_plugins(MapControlsPlugin::new(MapControlsConfig {
///     custom_controls: false,
///     ..default()
/// }));
/// ```
#[derive(Default)]
pub struct MapControlsPlugin {
    pub config: MapControlsConfig,
}

impl MapControlsPlugin {
    /// Create a new plugin with custom configuration.
    pub fn new(config: MapControlsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for MapControlsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());

        let mut installers = app.world_mut().get_resource_or_init::<MapInstallers>();
        if self.config.image_sprites {
            installers.image_sprites = Some(Arc::new(install_image_sprites));
        }
        if self.config.controls {
            installers.controls = Some(Arc::new(install_controls));
        }
        if self.config.custom_controls {
            installers.custom_controls = Some(Arc::new(install_custom_controls));
        }

        info!("MapControlsPlugin initialized");
    }
}
