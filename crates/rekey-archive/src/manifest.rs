use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rekey_types::KeyFormat;

use crate::error::{ArchiveError, ArchiveResult};

/// The archive manifest.
///
/// Declares which addressing scheme the archive currently uses. Every other
/// field is opaque to this subsystem and round-trips unmodified through the
/// flattened `extra` map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// The addressing scheme currently in effect.
    pub key_format: KeyFormat,

    /// All other manifest fields, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Manifest {
    /// Load the manifest from a file.
    pub fn load(path: &Path) -> ArchiveResult<Self> {
        let blob =
            fs::read_to_string(path).map_err(|e| ArchiveError::ManifestRead(e.to_string()))?;
        serde_json::from_str(&blob).map_err(|e| ArchiveError::ManifestRead(e.to_string()))
    }

    /// Write the manifest back to a file.
    pub fn store(&self, path: &Path) -> ArchiveResult<()> {
        let blob =
            serde_json::to_string(self).map_err(|e| ArchiveError::ManifestWrite(e.to_string()))?;
        fs::write(path, blob).map_err(|e| ArchiveError::ManifestWrite(e.to_string()))
    }
}
