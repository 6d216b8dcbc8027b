//! Declarative props describing the map an entity wants.

use std::collections::BTreeMap;

use bevy::prelude::*;
use bevy_mapbridge_engine::prelude::*;
use serde::Deserialize;

use crate::error::BridgeError;

/// Application callbacks keyed by engine event name.
pub type MapEventHandlers = BTreeMap<String, EventCallback>;

/// Placeholder shown while the map is not ready.
///
/// Points at an entity the application renders however it likes; the bridge
/// only reports it through [`MapSurface`](super::MapSurface).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLoader(pub Entity);

/// Root component for a bridged map.
///
/// Spawn an entity with this component to create (or join) the shared map
/// instance. Mutating it re-synchronizes the instance; removing it or
/// despawning the entity tears the bridge down.
///
/// # Example
///
/// ```rust,no_run
/// # use bevy::prelude::*;
/// # use bevy_mapbridge_core::prelude::*;
/// # use bevy_mapbridge_engine::prelude::*;
/// fn spawn_map(mut commands: Commands) {
///     commands.spawn(
///         MapProps::default()
///             .with_map_id("city-map")
///             .with_traffic(TrafficOptions { incidents: true, ..default() })
///             .on("click", |event| info!("clicked: {}", event.payload)),
///     );
/// }
/// ```
#[derive(Component, Debug, Clone, Default)]
pub struct MapProps {
    /// Container id chosen by the caller; generated when `None`.
    pub provided_map_id: Option<String>,
    /// Options for the factory; `MapBridgeConfig::default_init_options` when `None`.
    pub init_options: Option<MapInitOptions>,
    pub traffic_options: Option<TrafficOptions>,
    pub user_interaction: Option<UserInteractionOptions>,
    pub camera_options: Option<CameraOptions>,
    pub events: MapEventHandlers,
    pub image_sprites: Vec<ImageSpriteSpec>,
    pub controls: Vec<ControlSpec>,
    pub custom_controls: Vec<CustomControlSpec>,
    pub loader: Option<MapLoader>,
}

/// Serializable subset of [`MapProps`].
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DeclarativeProps {
    provided_map_id: Option<String>,
    options: Option<MapInitOptions>,
    traffic_options: Option<TrafficOptions>,
    user_interaction: Option<UserInteractionOptions>,
    camera_options: Option<CameraOptions>,
    image_sprites: Vec<ImageSpriteSpec>,
    controls: Vec<ControlSpec>,
}

impl MapProps {
    /// Build props from JSON.
    ///
    /// Callbacks, custom controls and the loader cannot be expressed in JSON
    /// and are left empty.
    ///
    /// ```rust
    /// # use bevy_mapbridge_core::components::MapProps;
    /// let props = MapProps::from_json(r#"{
    ///     "providedMapId": "fleet",
    ///     "trafficOptions": { "incidents": true },
    ///     "cameraOptions": { "zoom": 11.0 }
    /// }"#).unwrap();
    ///
    /// assert_eq!(props.provided_map_id.as_deref(), Some("fleet"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, BridgeError> {
        let parsed: DeclarativeProps =
            serde_json::from_str(json).map_err(|e| BridgeError::InvalidProps(e.to_string()))?;

        Ok(Self {
            provided_map_id: parsed.provided_map_id,
            init_options: parsed.options,
            traffic_options: parsed.traffic_options,
            user_interaction: parsed.user_interaction,
            camera_options: parsed.camera_options,
            image_sprites: parsed.image_sprites,
            controls: parsed.controls,
            ..default()
        })
    }

    pub fn with_map_id(mut self, id: impl Into<String>) -> Self {
        self.provided_map_id = Some(id.into());
        self
    }

    pub fn with_init_options(mut self, options: MapInitOptions) -> Self {
        self.init_options = Some(options);
        self
    }

    pub fn with_traffic(mut self, options: TrafficOptions) -> Self {
        self.traffic_options = Some(options);
        self
    }

    pub fn with_user_interaction(mut self, options: UserInteractionOptions) -> Self {
        self.user_interaction = Some(options);
        self
    }

    pub fn with_camera(mut self, options: CameraOptions) -> Self {
        self.camera_options = Some(options);
        self
    }

    /// Attach an existing callback under `name`.
    pub fn with_event(mut self, name: impl Into<String>, callback: EventCallback) -> Self {
        self.events.insert(name.into(), callback);
        self
    }

    /// Attach a closure under `name`.
    pub fn on(self, name: impl Into<String>, f: impl Fn(&MapEvent) + Send + Sync + 'static) -> Self {
        self.with_event(name, EventCallback::new(f))
    }

    pub fn with_image_sprites(mut self, sprites: Vec<ImageSpriteSpec>) -> Self {
        self.image_sprites = sprites;
        self
    }

    pub fn with_controls(mut self, controls: Vec<ControlSpec>) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_custom_controls(mut self, controls: Vec<CustomControlSpec>) -> Self {
        self.custom_controls = controls;
        self
    }

    pub fn with_loader(mut self, loader: Entity) -> Self {
        self.loader = Some(MapLoader(loader));
        self
    }
}
