//! # `bevy_mapbridge_engine`
//!
//! The imperative side of `bevy_mapbridge`: the contract a mapping SDK must
//! satisfy so the bridge can drive it.
//!
//! **This crate has no ECS concerns.** It only describes what an engine looks
//! like from the outside (setters, an event subsystem, sprite and control
//! managers) and how one is created (`MapFactory`).
//!
//! ## Architecture
//!
//! Layer 1 (this crate) is consumed by:
//! - **Layer 2** (`bevy_mapbridge_core`): the lifecycle bridge
//! - **Layer 3** (`bevy_mapbridge_controls`): default feature installers
//!
//! ## Example
//!
//! ```rust
//! use bevy_mapbridge_engine::prelude::*;
//! use bevy_mapbridge_engine::headless::HeadlessFactory;
//!
//! let factory = HeadlessFactory::default();
//! let handle = factory
//!     .create("map-root", &MapInitOptions::default())
//!     .expect("headless factory never fails by default");
//!
//! handle.set_traffic(Some(&TrafficOptions {
//!     incidents: true,
//!     ..Default::default()
//! }));
//! assert_eq!(handle.container_id(), "map-root");
//! ```

pub mod callback;
pub mod engine;
pub mod error;
pub mod features;
pub mod headless;
pub mod options;

pub mod prelude {
    //! Common imports for `bevy_mapbridge_engine` users.

    pub use crate::callback::{EventCallback, MapEvent};
    pub use crate::engine::{
        ControlManager, ImageSpriteManager, MapEngine, MapEvents, MapFactory, MapHandle,
    };
    pub use crate::error::EngineError;
    pub use crate::features::{
        BuiltinControlKind, ControlOptions, ControlPosition, ControlSpec, CustomControl,
        CustomControlSpec, ImageSpriteSpec, MapControl, SpriteSource,
    };
    pub use crate::options::{
        CameraOptions, MapInitOptions, TrafficFlow, TrafficOptions, UserInteractionOptions,
    };
}

pub use engine::{MapEngine, MapFactory, MapHandle};
pub use error::EngineError;
