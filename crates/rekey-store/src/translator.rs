use tracing::debug;
use uuid::Uuid;

use rekey_types::{KeyFormat, ObjectKey};

use crate::directory::ObjectDirectory;
use crate::error::{StoreError, StoreResult};
use crate::map::ConversionMap;

/// Translates object keys to a target addressing scheme, renaming the
/// backing objects as a side effect.
///
/// The two directions differ in one structural way: the content-hash
/// direction can converge (many old random ids whose objects are
/// byte-identical all hash to the same key), while the random-id direction
/// cannot. Convergence is expected, not exceptional, so a rename whose
/// destination already exists is skipped and only the mapping recorded.
pub struct KeyTranslator<'a> {
    target: KeyFormat,
    directory: &'a ObjectDirectory,
}

impl<'a> KeyTranslator<'a> {
    /// A translator producing keys in `target` format over `directory`.
    pub fn new(target: KeyFormat, directory: &'a ObjectDirectory) -> Self {
        Self { target, directory }
    }

    /// The target addressing scheme.
    pub fn target(&self) -> KeyFormat {
        self.target
    }

    /// Translate `old` to its key under the target scheme.
    ///
    /// A cached mapping is returned without touching the filesystem;
    /// otherwise the new key is produced, recorded in `map`, and the backing
    /// object renamed. Fails with [`StoreError::ObjectNotFound`] when the
    /// source object does not exist.
    pub fn translate(&self, map: &mut ConversionMap, old: &ObjectKey) -> StoreResult<ObjectKey> {
        if let Some(new) = map.get(old) {
            debug!(%old, %new, "key already translated");
            return Ok(new.clone());
        }

        let new = match self.target {
            KeyFormat::RandomId => self.to_random_id(old)?,
            KeyFormat::ContentHash => self.to_content_hash(old)?,
        };
        map.insert(old.clone(), new.clone());
        Ok(new)
    }

    /// Assign a fresh random identifier and rename the object.
    ///
    /// Each old key gets its own fresh id, so this direction never collides
    /// on the destination.
    fn to_random_id(&self, old: &ObjectKey) -> StoreResult<ObjectKey> {
        let new = ObjectKey::new(Uuid::new_v4().to_string())
            .unwrap_or_else(|_| unreachable!("uuid string is never empty"));
        self.directory.rename(old, &new)?;
        debug!(%old, %new, "renamed object to random id");
        Ok(new)
    }

    /// Hash the object's contents and rename it to the digest, unless an
    /// object already sits at that key (byte-identical content seen earlier
    /// in this run or already present in the directory).
    fn to_content_hash(&self, old: &ObjectKey) -> StoreResult<ObjectKey> {
        let source = self.directory.object_path(old);
        if !source.is_file() {
            return Err(StoreError::ObjectNotFound(old.clone()));
        }
        let digest = rekey_crypto::hash_file(&source)?;
        let new = ObjectKey::new(digest)
            .unwrap_or_else(|_| unreachable!("hex digest is never empty"));

        if self.directory.contains(&new) {
            // Convergence: the destination is never overwritten.
            debug!(%old, %new, "content already stored under target key, skipping rename");
        } else {
            self.directory.rename(old, &new)?;
            debug!(%old, %new, "renamed object to content hash");
        }
        Ok(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn key(s: &str) -> ObjectKey {
        ObjectKey::new(s).unwrap()
    }

    fn setup(objects: &[(&str, &[u8])]) -> (tempfile::TempDir, ObjectDirectory) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in objects {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let directory = ObjectDirectory::new(dir.path());
        (dir, directory)
    }

    #[test]
    fn random_id_renames_and_records() {
        let (_dir, directory) = setup(&[("oldhash", b"content")]);
        let translator = KeyTranslator::new(KeyFormat::RandomId, &directory);
        let mut map = ConversionMap::new();

        let new = translator.translate(&mut map, &key("oldhash")).unwrap();
        assert_ne!(new, key("oldhash"));
        assert!(Uuid::parse_str(new.as_str()).is_ok());
        assert!(!directory.contains(&key("oldhash")));
        assert!(directory.contains(&new));
        assert_eq!(map.get(&key("oldhash")), Some(&new));
    }

    #[test]
    fn content_hash_renames_to_digest() {
        let (_dir, directory) = setup(&[("some-uuid", b"hi")]);
        let translator = KeyTranslator::new(KeyFormat::ContentHash, &directory);
        let mut map = ConversionMap::new();

        let new = translator.translate(&mut map, &key("some-uuid")).unwrap();
        assert_eq!(new.as_str(), rekey_crypto::hash_bytes(b"hi"));
        assert!(!directory.contains(&key("some-uuid")));
        assert!(directory.contains(&new));
    }

    #[test]
    fn second_lookup_is_cached_and_renames_once() {
        let (_dir, directory) = setup(&[("obj", b"data")]);
        let translator = KeyTranslator::new(KeyFormat::RandomId, &directory);
        let mut map = ConversionMap::new();

        let first = translator.translate(&mut map, &key("obj")).unwrap();
        // The object is gone from its old name; only the cache can answer now.
        let second = translator.translate(&mut map, &key("obj")).unwrap();
        assert_eq!(first, second);
        assert_eq!(directory.keys().unwrap().len(), 1);
    }

    #[test]
    fn missing_object_fails_random_id() {
        let (_dir, directory) = setup(&[]);
        let translator = KeyTranslator::new(KeyFormat::RandomId, &directory);
        let mut map = ConversionMap::new();

        let err = translator.translate(&mut map, &key("ghost")).unwrap_err();
        assert!(matches!(err, StoreError::ObjectNotFound(k) if k == key("ghost")));
        assert!(map.is_empty());
    }

    #[test]
    fn missing_object_fails_content_hash() {
        let (_dir, directory) = setup(&[]);
        let translator = KeyTranslator::new(KeyFormat::ContentHash, &directory);
        let mut map = ConversionMap::new();

        let err = translator.translate(&mut map, &key("ghost")).unwrap_err();
        assert!(matches!(err, StoreError::ObjectNotFound(k) if k == key("ghost")));
    }

    #[test]
    fn identical_content_converges_without_overwrite() {
        let (_dir, directory) = setup(&[("id-one", b"same bytes"), ("id-two", b"same bytes")]);
        let translator = KeyTranslator::new(KeyFormat::ContentHash, &directory);
        let mut map = ConversionMap::new();

        let first = translator.translate(&mut map, &key("id-one")).unwrap();
        let second = translator.translate(&mut map, &key("id-two")).unwrap();
        assert_eq!(first, second);

        // One physical object at the digest; the superfluous source remains.
        assert!(directory.contains(&first));
        assert!(directory.contains(&key("id-two")));
        assert!(!directory.contains(&key("id-one")));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn distinct_content_does_not_converge() {
        let (_dir, directory) = setup(&[("id-one", b"aaa"), ("id-two", b"bbb")]);
        let translator = KeyTranslator::new(KeyFormat::ContentHash, &directory);
        let mut map = ConversionMap::new();

        let first = translator.translate(&mut map, &key("id-one")).unwrap();
        let second = translator.translate(&mut map, &key("id-two")).unwrap();
        assert_ne!(first, second);
        assert_eq!(directory.keys().unwrap(), {
            let mut expected = vec![first, second];
            expected.sort();
            expected
        });
    }
}
