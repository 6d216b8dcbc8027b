use thiserror::Error;

/// Errors reported by a map engine or its factory.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// The engine could not be created against the given container.
    #[error("Failed to create map in container '{container_id}': {reason}")]
    Creation {
        container_id: String,
        reason: String,
    },
    /// A sprite with this id could not be registered.
    #[error("Failed to add image sprite '{0}': {1}")]
    Sprite(String, String),
    /// A control could not be added to the map.
    #[error("Failed to add control '{0}': {1}")]
    Control(String, String),
}
