//! # `bevy_mapbridge_controls`
//!
//! Default feature installers for `bevy_mapbridge`: image sprites, built-in
//! controls and custom controls.
//!
//! The core bridge decides *when* installers run (once an instance exists,
//! whenever a spec list changes). This crate decides *what* they do.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_mapbridge_controls::MapControlsPlugin;
//! use bevy_mapbridge_core::prelude::*;
//! use bevy_mapbridge_engine::headless::HeadlessFactory;
//! use bevy_mapbridge_engine::prelude::*;
//!
//! App::new()
//!     .add_plugins(MapBridgeCorePlugin::default().with_factory(HeadlessFactory::default()))
//!     .add_plugins(MapControlsPlugin::default())
//!     .add_systems(Startup, |mut commands: Commands| {
//!         commands.spawn(
//!             MapProps::default()
//!                 .with_image_sprites(vec![ImageSpriteSpec::template("truck", "marker")])
//!                 .with_controls(vec![ControlSpec::new(
//!                     BuiltinControlKind::Zoom,
//!                     ControlPosition::TopLeft,
//!                 )]),
//!         );
//!     })
//!     .run();
//! ```

pub mod controls;
pub mod plugin;
pub mod sprites;

pub mod prelude {
    //! Common imports for `bevy_mapbridge_controls` users.

    pub use crate::controls::{install_controls, install_custom_controls};
    pub use crate::plugin::{MapControlsConfig, MapControlsPlugin};
    pub use crate::sprites::install_image_sprites;
}

pub use plugin::{MapControlsConfig, MapControlsPlugin};
