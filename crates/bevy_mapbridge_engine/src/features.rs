//! Declarative specs for sub-features installed on top of a running map.
//!
//! These are forwarded verbatim by the bridge to the feature installers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Where an image sprite's pixels come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpriteSource {
    /// Image loaded from a URL or data URI.
    Url(String),
    /// One of the engine's built-in SVG templates, recolored.
    Template(String),
}

/// An image registered in the map's sprite sheet under `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSpriteSpec {
    /// Id layers use to reference the image
    pub id: String,
    pub source: SpriteSource,
    /// Primary color for templates
    #[serde(default)]
    pub color: Option<String>,
    /// Secondary color for templates
    #[serde(default)]
    pub secondary_color: Option<String>,
    /// Scale for templates, 1.0 when unset
    #[serde(default)]
    pub scale: Option<f32>,
}

impl ImageSpriteSpec {
    pub fn url(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: SpriteSource::Url(url.into()),
            color: None,
            secondary_color: None,
            scale: None,
        }
    }

    pub fn template(id: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: SpriteSource::Template(template.into()),
            color: None,
            secondary_color: None,
            scale: None,
        }
    }
}

/// Corner of the map a control is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    /// Positioned by the control itself
    NonFixed,
}

/// Placement options shared by built-in and custom controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlOptions {
    pub position: ControlPosition,
}

/// Controls every engine is expected to ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuiltinControlKind {
    Compass,
    Pitch,
    Style,
    Zoom,
    Fullscreen,
    Scale,
    Traffic,
    TrafficLegend,
}

/// A built-in control to add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSpec {
    pub kind: BuiltinControlKind,
    #[serde(default)]
    pub options: ControlOptions,
    /// Control-specific settings passed through untouched.
    #[serde(default)]
    pub settings: serde_json::Value,
}

impl ControlSpec {
    pub fn new(kind: BuiltinControlKind, position: ControlPosition) -> Self {
        Self {
            kind,
            options: ControlOptions { position },
            settings: serde_json::Value::Null,
        }
    }
}

/// An application-defined control.
///
/// The engine decides how to host it; the bridge only forwards it.
pub trait CustomControl: Send + Sync + 'static {
    /// Name used in logs and by engines that key controls by name.
    fn name(&self) -> &str;
}

/// A custom control to add.
///
/// Equality is pointer identity of the control, plus equal options.
#[derive(Clone)]
pub struct CustomControlSpec {
    pub control: Arc<dyn CustomControl>,
    pub options: ControlOptions,
}

impl CustomControlSpec {
    pub fn new(control: Arc<dyn CustomControl>, position: ControlPosition) -> Self {
        Self {
            control,
            options: ControlOptions { position },
        }
    }
}

impl PartialEq for CustomControlSpec {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.control, &other.control) && self.options == other.options
    }
}

impl fmt::Debug for CustomControlSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomControlSpec")
            .field("control", &self.control.name())
            .field("options", &self.options)
            .finish()
    }
}

/// A control as handed to `ControlManager::add`.
#[derive(Clone)]
pub enum MapControl {
    Builtin {
        kind: BuiltinControlKind,
        settings: serde_json::Value,
    },
    Custom(Arc<dyn CustomControl>),
}

impl MapControl {
    /// Short name for logs.
    pub fn label(&self) -> String {
        match self {
            MapControl::Builtin { kind, .. } => format!("{kind:?}"),
            MapControl::Custom(control) => control.name().to_string(),
        }
    }
}

impl fmt::Debug for MapControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MapControl").field(&self.label()).finish()
    }
}
