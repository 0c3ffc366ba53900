use std::path::PathBuf;

use rekey_records::RecordError;
use rekey_types::KeyFormat;

/// Errors from archive migration. All are fatal to the current call; no
/// partial-success state is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The source archive path does not exist.
    #[error("archive does not exist at {0}")]
    ArchiveNotFound(PathBuf),

    /// The scratch area already exists, which signals a crashed or
    /// concurrent prior run. Requires operator cleanup before retry.
    #[error("scratch directory already exists at {0}; remove it before retrying")]
    ScratchCollision(PathBuf),

    /// A required component is absent after unpack; the archive is malformed.
    #[error("archive is missing component {0:?}")]
    MissingComponent(&'static str),

    /// The manifest could not be read or parsed.
    #[error("could not read archive manifest: {0}")]
    ManifestRead(String),

    /// The manifest could not be rewritten.
    #[error("could not write archive manifest: {0}")]
    ManifestWrite(String),

    /// The requested scheme pair is not a supported conversion direction.
    #[error("conversion from {from} to {to} is not supported")]
    UnsupportedConversion { from: KeyFormat, to: KeyFormat },

    /// The record store rewrite failed; wraps the underlying cause.
    #[error("archive conversion failed: {0}")]
    Conversion(#[from] RecordError),

    /// I/O error outside the rewrite phase.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The archive file could not be unpacked or packed.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Result alias for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;
