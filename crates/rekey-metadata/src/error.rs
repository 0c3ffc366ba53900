/// Errors from metadata tree parsing and serialization.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The blob does not parse as a metadata tree.
    #[error("malformed metadata: {0}")]
    Malformed(String),

    /// The tree could not be serialized back to a blob.
    #[error("metadata serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;
