//! Record metadata trees.
//!
//! Each record in an archive's row store carries a metadata blob describing
//! which objects it references and how they are laid out: a recursive tree
//! of named containers whose leaves each hold an optional object key.
//!
//! The wire shape is JSON. A leaf is an object with the single marker field
//! `"k"` (a string key or `null`); every other object is a container mapping
//! names to child nodes. Parsing happens once at the boundary into the
//! tagged [`Node`] enum, so no later code sniffs for the marker field.

pub mod error;
pub mod tree;

pub use error::{MetadataError, MetadataResult};
pub use tree::Node;
