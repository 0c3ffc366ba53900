use std::fs;
use std::path::{Path, PathBuf};

use rekey_types::ObjectKey;

use crate::error::{StoreError, StoreResult};

/// A flat directory of content objects, each file named by its current key.
///
/// The directory never interprets object contents; identity is by name only.
#[derive(Clone, Debug)]
pub struct ObjectDirectory {
    root: PathBuf,
}

impl ObjectDirectory {
    /// Wrap an existing directory path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory's root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path an object with this key would occupy.
    pub fn object_path(&self, key: &ObjectKey) -> PathBuf {
        self.root.join(key.as_str())
    }

    /// Whether an object with this key exists.
    pub fn contains(&self, key: &ObjectKey) -> bool {
        self.object_path(key).is_file()
    }

    /// Rename the object at `old` to `new`.
    ///
    /// Fails with [`StoreError::ObjectNotFound`] when the source object is
    /// missing.
    pub fn rename(&self, old: &ObjectKey, new: &ObjectKey) -> StoreResult<()> {
        let source = self.object_path(old);
        if !source.is_file() {
            return Err(StoreError::ObjectNotFound(old.clone()));
        }
        fs::rename(source, self.object_path(new))?;
        Ok(())
    }

    /// Keys of all objects currently in the directory, sorted.
    pub fn keys(&self) -> StoreResult<Vec<ObjectKey>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Ok(key) = ObjectKey::new(entry.file_name().to_string_lossy().into_owned()) {
                    keys.push(key);
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
