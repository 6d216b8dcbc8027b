//! # bevy_mapbridge
//!
//! Drive one shared, imperative map instance from declarative Bevy entities.
//!
//! This is a unified meta-crate that combines all `bevy_mapbridge_*` sub-crates with convenient
//! feature flags for easy integration.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_mapbridge::prelude::*;
//! use bevy_mapbridge::engine::headless::HeadlessFactory;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(MapBridgePlugin::default().with_factory(HeadlessFactory::default()))
//!         .add_systems(Startup, spawn_map)
//!         .add_systems(Update, show_map)
//!         .run();
//! }
//!
//! fn spawn_map(mut commands: Commands) {
//!     commands.spawn(
//!         MapProps::default()
//!             .with_traffic(TrafficOptions {
//!                 flow: TrafficFlow::Relative,
//!                 ..default()
//!             })
//!             .on("data", |event| info!("data: {}", event.payload)),
//!     );
//! }
//!
//! fn show_map(surfaces: Query<&MapSurface, Changed<MapSurface>>) {
//!     for surface in &surfaces {
//!         info!("map surface is now {:?}", surface);
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - **default**: Includes `controls`
//! - **controls**: Default installers for image sprites, built-in and custom controls
//!
//! ## Architecture
//!
//! This crate is organized into 3 layers:
//!
//! - **Layer 1** ([`engine`]): The engine contract and a headless engine
//! - **Layer 2** ([`core`]): The lifecycle bridge, store, components, events and systems
//! - **Layer 3** (optional): [`controls`], feature installers

pub mod plugin;

// Re-export sub-crates for advanced usage
pub use bevy_mapbridge_core as core;
pub use bevy_mapbridge_engine as engine;

#[cfg(feature = "controls")]
pub use bevy_mapbridge_controls as controls;

/// Unified prelude for bevy_mapbridge
///
/// This module re-exports the most commonly used types from all sub-crates
/// for convenient access.
pub mod prelude {
    // Core functionality (always available)
    pub use crate::core::prelude::*;
    pub use crate::engine::prelude::*;

    // Layer 3 plugins (feature-gated)
    #[cfg(feature = "controls")]
    pub use crate::controls::prelude::*;

    // Unified plugin
    pub use crate::plugin::MapBridgePlugin;
}
