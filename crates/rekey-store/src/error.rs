use rekey_types::ObjectKey;

/// Errors from object directory operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A leaf reference names an object absent from the directory.
    #[error("object not found in directory: {0}")]
    ObjectNotFound(ObjectKey),

    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
