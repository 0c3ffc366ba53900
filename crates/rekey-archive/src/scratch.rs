use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{ArchiveError, ArchiveResult};

/// The temporary working copy of an archive during migration.
///
/// Created at a fixed location derived from the archive path, so a leftover
/// directory from a crashed or concurrent run is detected as a collision
/// rather than silently reused. The directory is removed when the guard is
/// dropped, which covers every exit path from unpack onward, including
/// failures while packing the result.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create the scratch directory next to the archive.
    ///
    /// Fails with [`ArchiveError::ScratchCollision`] if the directory
    /// already exists; a pre-existing directory is never removed.
    pub fn create(archive_path: &Path) -> ArchiveResult<Self> {
        let path = Self::location(archive_path);
        if path.exists() {
            return Err(ArchiveError::ScratchCollision(path));
        }
        fs::create_dir(&path)?;
        Ok(Self { path })
    }

    /// The fixed scratch location for an archive path.
    pub fn location(archive_path: &Path) -> PathBuf {
        let name = archive_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "archive".to_string());
        archive_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(format!(".{name}.rekey"))
    }

    /// The scratch directory's path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove scratch directory");
        }
    }
}
