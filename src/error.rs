use thiserror::Error;

/// Error type for collision queries and shape loading.
#[derive(Debug, Error)]
pub enum CollisionError {
    /// An element can not be used as a collider. Nothing is compared once this
    /// is detected.
    #[error("element {index} is not a collider: {reason} ({item})")]
    ContractViolation {
        index: usize,
        item: String,
        reason: String,
    },
    /// The shape list is not valid JSON or not a JSON array.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O error while reading a shape list.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
