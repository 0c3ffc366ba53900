use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// Length of a content-hash key: a SHA-256 digest in lowercase hex.
pub const HEX_DIGEST_LEN: usize = 64;

/// Chunk size for streaming file reads.
const CHUNK_SIZE: usize = 8192;

/// Hash a file's contents, returning the lowercase hex digest.
///
/// Reads the file in fixed-size chunks through an incremental digest; the
/// file handle is released on every exit path.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Hash a byte slice in one shot, returning the lowercase hex digest.
pub fn hash_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn hash_bytes_known_vector() {
        // sha256("hi")
        assert_eq!(
            hash_bytes(b"hi"),
            "8f434346648f6b96df89dda901c5176b10a6d83961dd3c1ac88b59b2dc327aa4"
        );
    }

    #[test]
    fn hash_bytes_empty_input() {
        // sha256("")
        assert_eq!(
            hash_bytes(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_is_expected_length() {
        assert_eq!(hash_bytes(b"anything").len(), HEX_DIGEST_LEN);
    }

    #[test]
    fn hash_file_matches_hash_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obj");
        std::fs::write(&path, b"some object content").unwrap();
        assert_eq!(hash_file(&path).unwrap(), hash_bytes(b"some object content"));
    }

    #[test]
    fn hash_file_larger_than_chunk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big");
        let data = vec![0x5au8; CHUNK_SIZE * 3 + 17];
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&data).unwrap();
        drop(file);
        assert_eq!(hash_file(&path).unwrap(), hash_bytes(&data));
    }

    #[test]
    fn hash_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = hash_file(&dir.path().join("nope")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
