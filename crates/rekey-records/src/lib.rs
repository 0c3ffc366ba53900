//! Relational row store access.
//!
//! An archive's row store is a SQLite table of records, each carrying a
//! single metadata blob (a serialized metadata tree) or nothing. Rewriting
//! follows a two-phase discipline: one ordered scan parses and rewrites
//! every populated blob into a buffer, and only after the scan completes is
//! one update issued per buffered record. Interleaved writes would
//! invalidate the scan; no partial set of row updates is ever a valid end
//! state.

pub mod error;
pub mod rewriter;
pub mod store;

pub use error::{RecordError, RecordResult};
pub use rewriter::{RecordRewriter, RewriteStats};
pub use store::{Record, RecordStore};
