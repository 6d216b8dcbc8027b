//! What a bridged entity currently shows.

use bevy::prelude::*;

use super::props::MapLoader;

/// Surface decision for a bridged map, updated every frame.
///
/// The bridge never draws. Rendering code reads this component to decide
/// whether to show the loader entity or the container hosting the map.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub enum MapSurface {
    /// Not ready and no loader was given.
    #[default]
    Hidden,
    /// Not ready; show this placeholder.
    Loader(MapLoader),
    /// Ready; show the container the instance was created in.
    Container { id: String },
}

impl MapSurface {
    /// Surface while the map is not ready.
    pub fn pending(loader: Option<MapLoader>) -> Self {
        loader.map_or(MapSurface::Hidden, MapSurface::Loader)
    }

    pub fn container_id(&self) -> Option<&str> {
        match self {
            MapSurface::Container { id } => Some(id),
            _ => None,
        }
    }
}
