//! Option groups pushed to the engine through its setters.
//!
//! Each group is an independent configuration object. The bridge compares them
//! by value and only calls the matching setter when a group actually changes.

use serde::{Deserialize, Serialize};

/// How traffic flow is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrafficFlow {
    #[default]
    None,
    /// Speed relative to free-flow.
    Relative,
    /// Absolute speed.
    Absolute,
    /// Delay relative to free-flow.
    RelativeDelay,
}

/// Traffic overlay configuration, applied with `MapEngine::set_traffic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrafficOptions {
    /// Traffic flow overlay style
    pub flow: TrafficFlow,
    /// Show incident markers
    pub incidents: bool,
}

/// Which user gestures the map reacts to, applied with
/// `MapEngine::set_user_interaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserInteractionOptions {
    /// Master switch for all interaction
    pub interactive: bool,
    pub drag_pan: bool,
    pub drag_rotate: bool,
    pub scroll_zoom: bool,
    pub dbl_click_zoom: bool,
    pub box_zoom: bool,
    pub keyboard: bool,
    pub touch: bool,
    /// Zoom rate for mouse wheel, `None` keeps the engine default
    pub wheel_zoom_rate: Option<f32>,
}

impl Default for UserInteractionOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            drag_pan: true,
            drag_rotate: true,
            scroll_zoom: true,
            dbl_click_zoom: true,
            box_zoom: true,
            keyboard: true,
            touch: true,
            wheel_zoom_rate: None,
        }
    }
}

/// Camera placement, applied with `MapEngine::set_camera`.
///
/// Every field is optional; unset fields leave the current camera value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraOptions {
    /// `[longitude, latitude]`
    pub center: Option<[f64; 2]>,
    pub zoom: Option<f64>,
    /// Rotation in degrees clockwise from north
    pub bearing: Option<f64>,
    /// Tilt in degrees, 0 looks straight down
    pub pitch: Option<f64>,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
}

/// Options handed to `MapFactory::create` when a new instance is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapInitOptions {
    /// Style name or URL understood by the engine
    pub style: Option<String>,
    /// Label language
    pub language: Option<String>,
    /// Initial camera
    pub camera: Option<CameraOptions>,
    /// Engine-specific settings passed through untouched.
    pub settings: serde_json::Value,
}
