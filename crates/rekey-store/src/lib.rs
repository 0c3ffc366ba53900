//! Object directory access and key translation.
//!
//! An archive's object directory is a flat set of files, each named by its
//! current key. Converting an archive between addressing schemes means
//! renaming those files as their keys change, exactly once per object, while
//! the metadata trees that reference them are rewritten in step.
//!
//! # Components
//!
//! - [`ObjectDirectory`] — path helpers and the physical rename
//! - [`ConversionMap`] — memoized old-key → new-key mapping, scoped to one
//!   migration run and passed explicitly through the rewrite chain
//! - [`KeyTranslator`] — direction-dispatched translation with the rename
//!   side effect; the content-hash direction may converge (many old keys →
//!   one hash), the random-id direction cannot

pub mod directory;
pub mod error;
pub mod map;
pub mod translator;

pub use directory::ObjectDirectory;
pub use error::{StoreError, StoreResult};
pub use map::ConversionMap;
pub use translator::KeyTranslator;
