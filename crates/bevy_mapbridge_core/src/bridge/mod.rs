//! Framework-agnostic bridge logic.
//!
//! Nothing in here touches the ECS world: the systems in
//! [`crate::systems`] call these hooks and hand in the store.

pub mod installers;
pub mod lifecycle;
pub mod ready;
pub mod registry;
pub mod sync;

pub use installers::{FeatureInstaller, InstallCall, InstalledSpecs, MapInstallers};
pub use lifecycle::{BridgeCall, BridgePhase, CreateOutcome, MapBridge, resolve_container_id};
pub use ready::ReadySignal;
pub use registry::{EventCall, EventRegistry, RegistryKey};
pub use sync::{OptionCall, OptionSnapshot};
