use crate::storage::StorageError;

/// Errors surfaced by store and controller operations.
///
/// None of these are fatal: the worst outcome is a rejected user action.
#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("Invalid block index {index} (template has {len} blocks)")]
    InvalidIndex { index: usize, len: usize },
    #[error("No active block to update")]
    NoActiveBlock,
    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),
    #[error("Unrecognized drop payload: {0:?}")]
    UnrecognizedDropPayload(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
