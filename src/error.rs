use thiserror::Error;

/// Top-level error type for the planograph editor core.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Errors related to the layout document graph.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("no layout is currently open")]
    NoCurrentLayout,

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("wall endpoint references missing node {0}")]
    DanglingEndpoint(String),

    #[error("wall must connect two distinct nodes")]
    ZeroLengthWall,
}

/// Errors related to editor commands.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("fixture {0} has no shelf contents")]
    NoContents(String),
}

/// Errors related to snapshotting saved layouts.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("malformed layout snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`EditorError`].
pub type Result<T> = std::result::Result<T, EditorError>;
