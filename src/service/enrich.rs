use futures::future::join_all;
use indexmap::IndexSet;

use crate::db::RecordSource;
use crate::error::Result;
use crate::models::{BillingRecord, EnrichedRecord};
use crate::service::ClientCache;

/// Attach clients already in the cache, keeping input order
pub fn attach_clients(records: Vec<BillingRecord>, cache: &ClientCache) -> Vec<EnrichedRecord> {
    records
        .into_iter()
        .map(|record| {
            let client = cache.resolved(record.client_id);
            EnrichedRecord::new(record, client)
        })
        .collect()
}

/// Resolve every distinct uncached client concurrently, then join
///
/// A failed lookup leaves only that client unresolved; it is not cached.
pub async fn enrich_bulk<S>(
    records: Vec<BillingRecord>,
    cache: &mut ClientCache,
    source: &S,
) -> Vec<EnrichedRecord>
where
    S: RecordSource + ?Sized,
{
    let pending: IndexSet<i64> = records
        .iter()
        .map(|r| r.client_id)
        .filter(|id| !cache.contains(*id))
        .collect();

    tracing::debug!(
        "[Bulk] {} records, {} uncached clients to resolve",
        records.len(),
        pending.len()
    );

    let lookups = pending
        .iter()
        .map(|&client_id| async move { (client_id, source.fetch_client_by_id(client_id).await) });

    let mut failed = 0usize;
    for (client_id, outcome) in join_all(lookups).await {
        match outcome {
            Ok(client) => cache.insert(client_id, client),
            Err(e) => {
                failed += 1;
                tracing::warn!("[Bulk] Client {} left unresolved: {}", client_id, e);
            }
        }
    }

    if failed > 0 {
        tracing::warn!("[Bulk] {}/{} client lookups failed", failed, pending.len());
    }

    attach_clients(records, cache)
}

/// Resolve clients one record at a time through the cache
pub async fn enrich_incremental<S>(
    records: Vec<BillingRecord>,
    cache: &mut ClientCache,
    source: &S,
) -> Result<Vec<EnrichedRecord>>
where
    S: RecordSource + ?Sized,
{
    let mut enriched = Vec::with_capacity(records.len());
    for record in records {
        let client = cache.resolve(source, record.client_id).await?;
        enriched.push(EnrichedRecord::new(record, client));
    }
    Ok(enriched)
}
