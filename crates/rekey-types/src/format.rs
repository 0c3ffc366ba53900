use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// An object-addressing scheme for an export archive.
///
/// An archive's manifest declares which scheme is in effect via its
/// `key_format` field. Exactly two schemes exist: content-addressed keys
/// (the SHA-256 hex digest of the object's bytes) and randomly-generated
/// identifier keys (UUID v4). Any other value is rejected at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyFormat {
    /// Keys are derived from a cryptographic hash of the object's bytes.
    /// Identical content always yields the same key.
    #[serde(rename = "content-hash")]
    ContentHash,
    /// Keys are drawn independently of content, unique per assignment.
    #[serde(rename = "random-id")]
    RandomId,
}

impl KeyFormat {
    /// The manifest spelling of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::ContentHash => "content-hash",
            KeyFormat::RandomId => "random-id",
        }
    }

    /// Both supported formats, for listings and diagnostics.
    pub const ALL: [KeyFormat; 2] = [KeyFormat::ContentHash, KeyFormat::RandomId];
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyFormat {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content-hash" => Ok(KeyFormat::ContentHash),
            "random-id" => Ok(KeyFormat::RandomId),
            other => Err(TypeError::UnknownKeyFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_both_formats() {
        assert_eq!("content-hash".parse(), Ok(KeyFormat::ContentHash));
        assert_eq!("random-id".parse(), Ok(KeyFormat::RandomId));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "sha256".parse::<KeyFormat>().unwrap_err();
        assert_eq!(err, TypeError::UnknownKeyFormat("sha256".to_string()));
    }

    #[test]
    fn display_matches_manifest_spelling() {
        assert_eq!(KeyFormat::ContentHash.to_string(), "content-hash");
        assert_eq!(KeyFormat::RandomId.to_string(), "random-id");
    }

    #[test]
    fn serde_uses_manifest_spelling() {
        let json = serde_json::to_string(&KeyFormat::RandomId).unwrap();
        assert_eq!(json, "\"random-id\"");
        let parsed: KeyFormat = serde_json::from_str("\"content-hash\"").unwrap();
        assert_eq!(parsed, KeyFormat::ContentHash);
    }

    #[test]
    fn serde_rejects_unknown_spelling() {
        assert!(serde_json::from_str::<KeyFormat>("\"uuid4\"").is_err());
    }
}
