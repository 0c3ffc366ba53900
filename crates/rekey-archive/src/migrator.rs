use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use rekey_records::{RecordRewriter, RecordStore};
use rekey_store::{ConversionMap, KeyTranslator, ObjectDirectory};
use rekey_types::KeyFormat;

use crate::error::{ArchiveError, ArchiveResult};
use crate::manifest::Manifest;
use crate::scratch::ScratchDir;

/// Manifest file name inside an archive.
pub const MANIFEST_FILE: &str = "metadata.json";
/// Row store file name inside an archive.
pub const RECORDS_FILE: &str = "db.sqlite3";
/// Object directory name inside an archive.
pub const OBJECTS_DIR: &str = "repo";

/// Migrate an archive to the target addressing scheme.
///
/// Unpacks the archive into a scratch area, patches the manifest, rewrites
/// the row store and object directory with a fresh conversion map, and
/// packs the result into a new archive named `<target>-<file_name>` next to
/// the source. The source archive is never modified; the scratch area is
/// removed on every exit path.
pub fn migrate(archive_path: &Path, target: KeyFormat) -> ArchiveResult<PathBuf> {
    if !archive_path.is_file() {
        return Err(ArchiveError::ArchiveNotFound(archive_path.to_path_buf()));
    }

    let scratch = ScratchDir::create(archive_path)?;

    info!(archive = %archive_path.display(), scratch = %scratch.path().display(), "unpacking archive");
    unpack_archive(archive_path, scratch.path())?;

    let manifest_path = scratch.path().join(MANIFEST_FILE);
    let records_path = scratch.path().join(RECORDS_FILE);
    let objects_path = scratch.path().join(OBJECTS_DIR);
    if !manifest_path.is_file() {
        return Err(ArchiveError::MissingComponent(MANIFEST_FILE));
    }
    if !records_path.is_file() {
        return Err(ArchiveError::MissingComponent(RECORDS_FILE));
    }
    if !objects_path.is_dir() {
        return Err(ArchiveError::MissingComponent(OBJECTS_DIR));
    }

    info!("updating manifest key format to {target}");
    let mut manifest = Manifest::load(&manifest_path)?;
    manifest.key_format = target;
    manifest.store(&manifest_path)?;

    // Rewrite the records and objects in the scratch copy. The store holds
    // the SQLite file open, so it must be closed before packing.
    {
        let store = RecordStore::open(&records_path)?;
        let directory = ObjectDirectory::new(&objects_path);
        let translator = KeyTranslator::new(target, &directory);
        let mut map = ConversionMap::new();
        let stats = RecordRewriter::new(&store).rewrite_all(&mut map, &translator)?;
        info!(
            records = stats.rewritten,
            keys = map.len(),
            "converted archive contents"
        );
    }

    let new_path = converted_archive_path(archive_path, target);
    info!(archive = %new_path.display(), "packing converted archive");
    pack_directory(scratch.path(), &new_path)?;

    drop(scratch);
    info!("conversion complete");
    Ok(new_path)
}

/// Read an archive's current key format straight out of the packed file,
/// without unpacking it to disk.
pub fn read_key_format(archive_path: &Path) -> ArchiveResult<KeyFormat> {
    if !archive_path.is_file() {
        return Err(ArchiveError::ArchiveNotFound(archive_path.to_path_buf()));
    }
    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    let entry = archive
        .by_name(MANIFEST_FILE)
        .map_err(|_| ArchiveError::MissingComponent(MANIFEST_FILE))?;
    let manifest: Manifest =
        serde_json::from_reader(entry).map_err(|e| ArchiveError::ManifestRead(e.to_string()))?;
    Ok(manifest.key_format)
}

/// The output path for a converted archive: the target format prefixed to
/// the original file name, alongside the source.
fn converted_archive_path(archive_path: &Path, target: KeyFormat) -> PathBuf {
    let name = archive_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());
    archive_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{target}-{name}"))
}

fn unpack_archive(archive_path: &Path, destination: &Path) -> ArchiveResult<()> {
    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    archive.extract(destination)?;
    Ok(())
}

/// Pack a directory tree into a zip archive, preserving relative paths.
pub(crate) fn pack_directory(dir: &Path, output: &Path) -> ArchiveResult<()> {
    let file = File::create(output)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(io::Error::from)?;
        let path = entry.path();
        let relative = path.strip_prefix(dir).unwrap_or(path);
        if relative.as_os_str().is_empty() {
            continue;
        }
        let name = relative.to_string_lossy();
        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name, options)?;
            let mut source = File::open(path)?;
            io::copy(&mut source, &mut zip)?;
        }
    }

    zip.finish()?;
    Ok(())
}
