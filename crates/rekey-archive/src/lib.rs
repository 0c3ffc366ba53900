//! Archive key-format migration.
//!
//! An export archive is a zip file holding three co-located representations
//! that must stay mutually consistent: a manifest declaring the addressing
//! scheme in effect (`metadata.json`), a relational row store whose records
//! carry metadata trees referencing objects (`db.sqlite3`), and a flat
//! object directory whose file names are the keys those trees reference
//! (`repo/`).
//!
//! [`convert`] migrates an archive between content-addressed keys and
//! random-identifier keys with all-or-nothing recoverability: the source
//! archive is never modified, all mutation happens in a scratch copy that is
//! removed on every exit path, and a new archive is produced alongside the
//! original only when the whole migration succeeds.
//!
//! # Components
//!
//! - [`Manifest`] — the scheme declaration, other fields preserved opaquely
//! - [`ScratchDir`] — RAII guard for the temporary working copy
//! - [`migrate`] — unpack, validate, patch, rewrite, repack
//! - [`convert`] — entry point: identity and dry-run fast paths, direction
//!   dispatch
//! - [`read_key_format`] — inspect a packed archive's current scheme

pub mod convert;
pub mod error;
pub mod manifest;
pub mod migrator;
pub mod scratch;

pub use convert::convert;
pub use error::{ArchiveError, ArchiveResult};
pub use manifest::Manifest;
pub use migrator::{migrate, read_key_format, MANIFEST_FILE, OBJECTS_DIR, RECORDS_FILE};
pub use scratch::ScratchDir;
