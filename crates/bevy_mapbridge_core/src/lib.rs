//! # `bevy_mapbridge_core`
//!
//! Lifecycle bridge for `bevy_mapbridge`. Turns declarative `MapProps`
//! components into imperative calls on a single shared map instance.
//!
//! **This crate does NOT draw anything or configure sub-features** - rendering
//! reads [`MapSurface`](components::MapSurface), and image sprites and
//! controls are installed by Layer 3 plugins through
//! [`MapInstallers`](bridge::MapInstallers).
//!
//! ## Architecture
//!
//! Layer 2 (this crate) sits between:
//! - **Layer 1** (`bevy_mapbridge_engine`): the engine contract
//! - **Layer 3** (`bevy_mapbridge_controls`): default feature installers
//!
//! ## What Layer 2 Provides
//!
//! 1. **Shared store**: [`SharedMapState`](store::SharedMapState) with the
//!    live instance and its readiness flag
//! 2. **Creation**: at most one instance, created on the first mount
//! 3. **Readiness gating**: option groups are applied only once the map is ready
//! 4. **Diffing**: option groups and event handlers are applied only when they change
//! 5. **Teardown**: handlers detached and the slot released on unmount
//! 6. **Events**: `MapCreated`, `MapReady`, `MapCreationFailed`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_mapbridge_core::prelude::*;
//! use bevy_mapbridge_engine::headless::HeadlessFactory;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(MapBridgeCorePlugin::default().with_factory(HeadlessFactory::default()))
//!         .add_systems(Startup, spawn_map)
//!         .run();
//! }
//!
//! fn spawn_map(mut commands: Commands) {
//!     commands
//!         .spawn(MapProps::default().with_map_id("fleet").on("data", |event| {
//!             info!("data: {}", event.payload);
//!         }))
//!         .observe(|trigger: On<MapReady>| {
//!             info!("map ready in '{}'", trigger.event().container_id);
//!         });
//! }
//! ```

pub mod bridge;
pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod store;
pub mod systems;

pub mod prelude {
    //! Common imports for `bevy_mapbridge_core` users.

    pub use crate::bridge::{BridgePhase, FeatureInstaller, MapBridge, MapInstallers};
    pub use crate::components::{
        BridgeCreationFailed, BridgeState, MapEventHandlers, MapLoader, MapProps, MapSurface,
    };
    pub use crate::error::BridgeError;
    pub use crate::events::{MapCreated, MapCreationFailed, MapReady};
    pub use crate::plugin::{
        MapBridgeConfig, MapBridgeCorePlugin, MapBridgeSystems, MapFactoryResource,
    };
    pub use crate::store::SharedMapState;
}

// Re-export plugin types at crate root for convenience
pub use plugin::{MapBridgeConfig, MapBridgeCorePlugin, MapBridgeSystems, MapFactoryResource};
