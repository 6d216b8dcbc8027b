//! The engine contract and the shared instance handle.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::callback::EventCallback;
use crate::error::EngineError;
use crate::features::{ControlOptions, ImageSpriteSpec, MapControl};
use crate::options::{CameraOptions, MapInitOptions, TrafficOptions, UserInteractionOptions};

/// An imperative mapping engine.
///
/// Methods take `&self`: engines are shared behind `Arc` and are expected to
/// use interior mutability. Passing `None` to a setter clears that option
/// group back to the engine default.
pub trait MapEngine: Send + Sync + 'static {
    fn set_traffic(&self, options: Option<&TrafficOptions>);

    fn set_user_interaction(&self, options: Option<&UserInteractionOptions>);

    fn set_camera(&self, options: Option<&CameraOptions>);

    /// The engine's event subsystem.
    fn events(&self) -> &dyn MapEvents;

    /// The engine's sprite sheet.
    fn image_sprites(&self) -> &dyn ImageSpriteManager;

    /// The engine's control container.
    fn controls(&self) -> &dyn ControlManager;
}

/// Event subsystem of an engine.
///
/// `remove` must only detach the callback that is pointer-equal to the one
/// given; other callbacks under the same name stay attached.
pub trait MapEvents: Send + Sync {
    fn add(&self, name: &str, callback: &EventCallback);

    fn remove(&self, name: &str, callback: &EventCallback);
}

/// Sprite sheet of an engine.
pub trait ImageSpriteManager: Send + Sync {
    /// Whether an image is already registered under `id`.
    fn has(&self, id: &str) -> bool;

    fn add(&self, sprite: &ImageSpriteSpec) -> Result<(), EngineError>;
}

/// Control container of an engine.
pub trait ControlManager: Send + Sync {
    fn add(&self, control: MapControl, options: &ControlOptions) -> Result<(), EngineError>;
}

/// Creates engine instances bound to a container.
///
/// Any `Fn(&str, &MapInitOptions) -> Result<MapHandle, EngineError>` closure
/// is a factory.
pub trait MapFactory: Send + Sync + 'static {
    fn create(&self, container_id: &str, options: &MapInitOptions)
    -> Result<MapHandle, EngineError>;
}

impl<F> MapFactory for F
where
    F: Fn(&str, &MapInitOptions) -> Result<MapHandle, EngineError> + Send + Sync + 'static,
{
    fn create(
        &self,
        container_id: &str,
        options: &MapInitOptions,
    ) -> Result<MapHandle, EngineError> {
        self(container_id, options)
    }
}

/// Shared reference to a live engine instance.
///
/// Cheap to clone. Dereferences to the engine so setters can be called
/// directly on the handle.
#[derive(Clone)]
pub struct MapHandle {
    engine: Arc<dyn MapEngine>,
    container_id: Arc<str>,
}

impl MapHandle {
    pub fn new(container_id: impl Into<Arc<str>>, engine: Arc<dyn MapEngine>) -> Self {
        Self {
            engine,
            container_id: container_id.into(),
        }
    }

    /// Id of the container the instance was created against.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn engine(&self) -> &dyn MapEngine {
        self.engine.as_ref()
    }

    /// Whether both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.engine, &other.engine)
    }
}

impl Deref for MapHandle {
    type Target = dyn MapEngine;

    fn deref(&self) -> &Self::Target {
        self.engine.as_ref()
    }
}

impl fmt::Debug for MapHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapHandle")
            .field("container_id", &self.container_id)
            .field("engine", &Arc::as_ptr(&self.engine).cast::<()>())
            .finish()
    }
}
