//! Error taxonomy for request records.

/// Errors produced while building or decoding an [`Instance`](super::Instance).
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("invalid metadata shape: expected {expected} elements, got {actual}")]
    InvalidMetadataShape { expected: usize, actual: usize },

    #[error("invalid metadata field {field} at position {position}: expected {expected}")]
    InvalidMetadataField {
        position: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("unknown request kind: {0}")]
    UnknownRequestKind(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for request record operations.
pub type Result<T> = std::result::Result<T, InstanceError>;
