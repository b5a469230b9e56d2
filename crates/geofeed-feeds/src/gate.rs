//! One-shot ingestion gate.
//!
//! The snapshot is fetched once per session. [`IngestGate::load`] runs the
//! fetch + normalise step the first time it is awaited and hands back the
//! same [`Catalog`] on every later call, including concurrent ones, without
//! touching the source again. A failed load leaves the gate empty.

use crate::{
    error::IngestError,
    ingest::{ingest, IngestPolicy},
    source::FeedSource,
};
use geofeed_core::{Catalog, Normalizer};
use tokio::sync::OnceCell;

#[derive(Debug, Default)]
pub struct IngestGate {
    cell: OnceCell<Catalog>,
}

impl IngestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog, if ingestion has completed.
    pub fn get(&self) -> Option<&Catalog> {
        self.cell.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Fetch and ingest on first call; return the stored catalog afterwards.
    pub async fn load(
        &self,
        source: &dyn FeedSource,
        normalizer: &Normalizer,
        policy: IngestPolicy,
    ) -> Result<&Catalog, IngestError> {
        if let Some(catalog) = self.cell.get() {
            tracing::debug!(source = source.name(), "feed already ingested, ignoring load");
            return Ok(catalog);
        }
        self.cell
            .get_or_try_init(|| async {
                tracing::info!(source = source.name(), "fetching feed");
                let records = source.fetch().await?;
                ingest(records, normalizer, policy).map(|report| report.catalog)
            })
            .await
    }

    /// Install an already-built catalog. Returns `false` (and drops `catalog`)
    /// if the gate was already populated.
    pub fn populate(&self, catalog: Catalog) -> bool {
        let accepted = self.cell.set(catalog).is_ok();
        if !accepted {
            tracing::debug!("feed already ingested, ignoring populate");
        }
        accepted
    }
}
