use std::path::{Path, PathBuf};

use tracing::info;

use rekey_types::KeyFormat;

use crate::error::{ArchiveError, ArchiveResult};
use crate::migrator;

/// Convert an archive from one addressing scheme to another.
///
/// - `from == to` is the identity fast path: the input path is returned and
///   no I/O is performed.
/// - `dry_run` reports the intended conversion and returns the input path
///   unchanged.
/// - Otherwise the archive is migrated and the new archive's path returned.
///   The source archive is read-only to this call; all mutation happens in a
///   scratch copy and a new file is produced alongside the original.
///
/// Any scheme pair other than the two supported directions fails with
/// [`ArchiveError::UnsupportedConversion`].
pub fn convert(
    from: KeyFormat,
    to: KeyFormat,
    archive_path: &Path,
    dry_run: bool,
) -> ArchiveResult<PathBuf> {
    if from == to {
        return Ok(archive_path.to_path_buf());
    }

    match (from, to) {
        (KeyFormat::ContentHash, KeyFormat::RandomId)
        | (KeyFormat::RandomId, KeyFormat::ContentHash) => {
            info!(%from, %to, archive = %archive_path.display(), "converting archive key format");
            if dry_run {
                info!("dry run, archive left unchanged");
                return Ok(archive_path.to_path_buf());
            }
            migrator::migrate(archive_path, to)
        }
        (from, to) => Err(ArchiveError::UnsupportedConversion { from, to }),
    }
}
