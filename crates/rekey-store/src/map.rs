use std::collections::HashMap;

use rekey_types::ObjectKey;

/// Memoized old-key → new-key mapping, scoped to one migration run.
///
/// Populated lazily on first encounter; every later lookup of the same old
/// key returns the same new key, so each backing object is renamed at most
/// once. A lookup miss is an ordinary branch (insert-on-miss), not an error.
///
/// The map is passed explicitly through the rewrite chain rather than held
/// as ambient state, and never outlives the migration call that created it.
#[derive(Debug, Default)]
pub struct ConversionMap {
    entries: HashMap<ObjectKey, ObjectKey>,
}

impl ConversionMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The new key previously recorded for `old`, if any.
    pub fn get(&self, old: &ObjectKey) -> Option<&ObjectKey> {
        self.entries.get(old)
    }

    /// Record a translation. First writer wins: a key already present keeps
    /// its published value.
    pub fn insert(&mut self, old: ObjectKey, new: ObjectKey) {
        self.entries.entry(old).or_insert(new);
    }

    /// Number of distinct old keys translated so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been translated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ObjectKey {
        ObjectKey::new(s).unwrap()
    }

    #[test]
    fn miss_then_hit() {
        let mut map = ConversionMap::new();
        assert!(map.get(&key("old")).is_none());
        map.insert(key("old"), key("new"));
        assert_eq!(map.get(&key("old")), Some(&key("new")));
    }

    #[test]
    fn first_writer_wins() {
        let mut map = ConversionMap::new();
        map.insert(key("old"), key("first"));
        map.insert(key("old"), key("second"));
        assert_eq!(map.get(&key("old")), Some(&key("first")));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn len_and_is_empty() {
        let mut map = ConversionMap::new();
        assert!(map.is_empty());
        map.insert(key("a"), key("b"));
        map.insert(key("c"), key("d"));
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }
}
