//! Content hashing for rekey.
//!
//! Content-addressed keys are the lowercase SHA-256 hex digest of an
//! object's bytes. Files are hashed by streaming fixed-size chunks through
//! an incremental digest, so memory use is bounded regardless of object
//! size.

pub mod hasher;

pub use hasher::{hash_bytes, hash_file, HEX_DIGEST_LEN};
