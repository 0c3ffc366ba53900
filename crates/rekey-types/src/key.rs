use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A key naming one object in an archive's object directory.
///
/// Object identity is by name only: the key is exactly the file name under
/// the directory, and its textual shape depends on the addressing scheme in
/// effect (hex digest or UUID). The store never interprets the contents.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Wrap a key string. Fails on the empty string, which can never name
    /// a file in the object directory.
    pub fn new(key: impl Into<String>) -> Result<Self, TypeError> {
        let key = key.into();
        if key.is_empty() {
            return Err(TypeError::EmptyKey);
        }
        Ok(Self(key))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, yielding the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectKey({})", self.0)
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_nonempty() {
        let key = ObjectKey::new("abc123").unwrap();
        assert_eq!(key.as_str(), "abc123");
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(ObjectKey::new("").unwrap_err(), TypeError::EmptyKey);
    }

    #[test]
    fn display_is_raw_key() {
        let key = ObjectKey::new("deadbeef").unwrap();
        assert_eq!(key.to_string(), "deadbeef");
    }

    #[test]
    fn serde_is_transparent() {
        let key = ObjectKey::new("k1").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"k1\"");
        let parsed: ObjectKey = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = ObjectKey::new("aaa").unwrap();
        let b = ObjectKey::new("bbb").unwrap();
        assert!(a < b);
    }
}
