use tracing::{debug, info};

use rekey_metadata::Node;
use rekey_store::{ConversionMap, KeyTranslator};

use crate::error::{RecordError, RecordResult};
use crate::store::RecordStore;

/// Counts reported after a rewrite pass, for advisory logging only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Rows seen by the scan.
    pub scanned: usize,
    /// Rows whose metadata blob was rewritten and committed.
    pub rewritten: usize,
}

/// Rewrites every populated metadata blob in a row store under a key
/// translator, using a two-phase read-then-write discipline.
pub struct RecordRewriter<'a> {
    store: &'a RecordStore,
}

impl<'a> RecordRewriter<'a> {
    /// A rewriter over the given row store.
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Rewrite all records.
    ///
    /// Phase one scans every row in id order; rows with an absent or empty
    /// metadata blob are skipped, all others are parsed, rewritten through
    /// `translator`, and buffered. Phase two commits one update per buffered
    /// row, only after the scan has fully completed. Any failure in either
    /// phase aborts the whole pass; a partial set of row updates is never a
    /// valid end state, so the caller must discard the working copy.
    pub fn rewrite_all(
        &self,
        map: &mut ConversionMap,
        translator: &KeyTranslator<'_>,
    ) -> RecordResult<RewriteStats> {
        let records = self.store.scan()?;
        let mut stats = RewriteStats {
            scanned: records.len(),
            ..RewriteStats::default()
        };

        // Read phase: parse and rewrite into a buffer, no row writes yet.
        let mut pending: Vec<(i64, String)> = Vec::new();
        for record in &records {
            let blob = match record.metadata.as_deref() {
                Some(blob) if !blob.trim().is_empty() => blob,
                _ => {
                    debug!(id = record.id, "record has no metadata, skipping");
                    continue;
                }
            };

            let tree = Node::parse(blob).map_err(|source| RecordError::Metadata {
                id: record.id,
                source,
            })?;
            let rewritten = tree
                .rewrite(&mut |key| translator.translate(map, key))
                .map_err(|source| RecordError::Translation {
                    id: record.id,
                    source,
                })?;
            let blob = rewritten
                .serialize()
                .map_err(|source| RecordError::Metadata {
                    id: record.id,
                    source,
                })?;

            debug!(id = record.id, "rewrote record metadata");
            pending.push((record.id, blob));
        }

        // Write phase: commit the buffered blobs.
        for (id, blob) in &pending {
            self.store.update_metadata(*id, blob)?;
        }
        stats.rewritten = pending.len();

        info!(
            scanned = stats.scanned,
            rewritten = stats.rewritten,
            "record store rewrite complete"
        );
        Ok(stats)
    }
}
