use std::sync::Arc;
use std::time::Instant;

use crate::config::EnrichmentStrategy;
use crate::db::RecordSource;
use crate::error::Result;
use crate::models::{EnrichedRecord, FilterCriteria, RawFilterInput, RecordKind, StatusFilter};
use crate::service::{
    apply, apply_status, enrich_bulk, filter_incremental, normalize, normalize_status, ClientCache,
};

/// Runs fetch → enrich → filter passes against one record source
pub struct RecordFilterService {
    source: Arc<dyn RecordSource>,
    strategy: EnrichmentStrategy,
}

impl RecordFilterService {
    pub fn new(source: Arc<dyn RecordSource>, strategy: EnrichmentStrategy) -> Self {
        Self { source, strategy }
    }

    pub fn strategy(&self) -> EnrichmentStrategy {
        self.strategy
    }

    /// Full pass from raw form input
    pub async fn run_pass(
        &self,
        kind: RecordKind,
        raw: &RawFilterInput,
    ) -> Result<Vec<EnrichedRecord>> {
        let criteria = normalize(raw);
        let status = normalize_status(raw.status.as_deref());
        self.filter(kind, &criteria, &status).await
    }

    /// Full pass with already-normalized criteria
    ///
    /// Each call owns a fresh client cache. Any transport failure fails the
    /// whole pass; no partial result is returned.
    pub async fn filter(
        &self,
        kind: RecordKind,
        criteria: &FilterCriteria,
        status: &StatusFilter,
    ) -> Result<Vec<EnrichedRecord>> {
        let start_time = Instant::now();
        let mut cache = ClientCache::new();

        let filtered = match self.filter_with(kind, criteria, &mut cache).await {
            Ok(filtered) => filtered,
            Err(e) => {
                tracing::error!("Failed to load {} records: {}", kind, e);
                return Err(e);
            }
        };
        let results = apply_status(filtered, status);

        tracing::info!(
            "{} pass ({:?}): {} results, {} clients cached, {:?}",
            kind,
            self.strategy,
            results.len(),
            cache.len(),
            start_time.elapsed()
        );

        Ok(results)
    }

    async fn filter_with(
        &self,
        kind: RecordKind,
        criteria: &FilterCriteria,
        cache: &mut ClientCache,
    ) -> Result<Vec<EnrichedRecord>> {
        let source = self.source.as_ref();

        match self.strategy {
            EnrichmentStrategy::Snapshot => {
                let (records, clients) = tokio::try_join!(
                    source.fetch_all_records(kind),
                    source.fetch_all_clients()
                )?;
                cache.seed(clients);
                let enriched = enrich_bulk(records, cache, source).await;
                Ok(apply(enriched, criteria))
            }
            EnrichmentStrategy::Bulk => {
                let records = source.fetch_all_records(kind).await?;
                let enriched = enrich_bulk(records, cache, source).await;
                Ok(apply(enriched, criteria))
            }
            EnrichmentStrategy::Incremental => {
                let records = source.fetch_all_records(kind).await?;
                filter_incremental(records, criteria, cache, source).await
            }
        }
    }
}
