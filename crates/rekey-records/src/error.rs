use rekey_metadata::MetadataError;
use rekey_store::StoreError;

/// Errors from row store access and metadata rewriting.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The row store could not be opened or queried.
    #[error("row store error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A record's metadata blob does not parse as a metadata tree.
    #[error("record {id}: {source}")]
    Metadata {
        id: i64,
        #[source]
        source: MetadataError,
    },

    /// Key translation failed while rewriting a record.
    #[error("record {id}: {source}")]
    Translation {
        id: i64,
        #[source]
        source: StoreError,
    },
}

/// Result alias for record operations.
pub type RecordResult<T> = Result<T, RecordError>;
