//! Ingestion: raw records to a [`Catalog`] under an explicit failure policy.

use crate::error::IngestError;
use geofeed_core::{Catalog, Normalizer};
use serde_json::Value;

/// What to do with a record that fails normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IngestPolicy {
    /// Log the record and continue.
    #[default]
    Skip,
    /// Stop at the first malformed record.
    Abort,
}

#[derive(Debug)]
pub struct IngestReport {
    pub catalog: Catalog,
    /// Records dropped because they failed normalisation.
    pub skipped: usize,
    /// Records dropped because their id was already present.
    pub duplicates: usize,
}

pub fn ingest(
    records: Vec<Value>,
    normalizer: &Normalizer,
    policy: IngestPolicy,
) -> Result<IngestReport, IngestError> {
    let total = records.len();
    let mut items = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for (index, raw) in records.iter().enumerate() {
        match normalizer.normalize(raw) {
            Ok(item) => items.push(item),
            Err(source) if policy == IngestPolicy::Abort => {
                return Err(IngestError::Record { index, source });
            }
            Err(error) => {
                tracing::warn!(index, %error, "skipping malformed feed record");
                skipped += 1;
            }
        }
    }

    let catalog = Catalog::from_items(items);
    let duplicates = catalog.duplicates();
    tracing::info!(total, kept = catalog.len(), skipped, duplicates, "feed ingested");

    Ok(IngestReport {
        catalog,
        skipped,
        duplicates,
    })
}
