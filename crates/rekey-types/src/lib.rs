//! Foundation types for rekey.
//!
//! This crate provides the shared vocabulary used throughout the rekey
//! workspace. Every other rekey crate depends on `rekey-types`.
//!
//! # Key Types
//!
//! - [`KeyFormat`] — The two supported object-addressing schemes
//! - [`ObjectKey`] — A key naming one object in an archive's object directory

pub mod error;
pub mod format;
pub mod key;

pub use error::TypeError;
pub use format::KeyFormat;
pub use key::ObjectKey;
