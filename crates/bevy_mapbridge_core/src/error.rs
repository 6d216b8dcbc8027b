//! Error type for the lifecycle bridge.

use bevy_mapbridge_engine::EngineError;
use thiserror::Error;

use crate::bridge::BridgePhase;

/// Errors surfaced by the bridge.
///
/// Transient states (no instance yet, stale callbacks) are not errors and are
/// never reported through this type.
#[derive(Debug, Clone, Error)]
pub enum BridgeError {
    /// The factory refused to build an instance.
    #[error("Map creation failed: {0}")]
    Creation(#[from] EngineError),
    /// No instance exists and nothing can create one.
    #[error("No map factory registered; insert `MapFactoryResource` or use `MapBridgeCorePlugin::with_factory`")]
    MissingFactory,
    /// Declarative props could not be parsed.
    #[error("Invalid map props: {0}")]
    InvalidProps(String),
    /// The mount hook ran on a bridge that failed or was torn down.
    #[error("Cannot mount a map bridge in phase {0:?}")]
    InvalidPhase(BridgePhase),
}
