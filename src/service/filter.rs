use crate::db::RecordSource;
use crate::error::Result;
use crate::models::{BillingRecord, Client, EnrichedRecord, FilterCriteria, StatusFilter};
use crate::service::ClientCache;

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl FilterCriteria {
    /// Criteria that need only the record itself: client id and date range
    pub fn matches_record(&self, record: &BillingRecord) -> bool {
        if let Some(client_id) = self.client_id {
            if record.client_id != client_id {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if record.record_date < start {
                return false;
            }
        }
        if let Some(end_before) = self.end_before {
            if record.record_date >= end_before {
                return false;
            }
        }
        true
    }

    /// Company and email criteria; an unresolved client never matches them
    pub fn matches_client(&self, client: Option<&Client>) -> bool {
        if !self.needs_client() {
            return true;
        }
        let Some(client) = client else {
            return false;
        };

        let company_ok = self
            .company_name
            .as_deref()
            .map_or(true, |needle| contains_lowercase(&client.company_name, needle));
        let email_ok = self
            .client_email
            .as_deref()
            .map_or(true, |needle| contains_lowercase(&client.email, needle));

        company_ok && email_ok
    }

    pub fn matches(&self, enriched: &EnrichedRecord) -> bool {
        self.matches_record(&enriched.record) && self.matches_client(enriched.client.as_ref())
    }
}

impl StatusFilter {
    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted.to_lowercase() == status.to_lowercase(),
        }
    }
}

/// Keep records meeting every present criterion, in input order
pub fn apply(records: Vec<EnrichedRecord>, criteria: &FilterCriteria) -> Vec<EnrichedRecord> {
    if criteria.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| criteria.matches(r)).collect()
}

pub fn apply_status(records: Vec<EnrichedRecord>, status: &StatusFilter) -> Vec<EnrichedRecord> {
    if *status == StatusFilter::All {
        return records;
    }
    records
        .into_iter()
        .filter(|r| status.matches(&r.record.status))
        .collect()
}

/// Filter before enriching: cheap criteria first, then a cached lookup per survivor
pub async fn filter_incremental<S>(
    records: Vec<BillingRecord>,
    criteria: &FilterCriteria,
    cache: &mut ClientCache,
    source: &S,
) -> Result<Vec<EnrichedRecord>>
where
    S: RecordSource + ?Sized,
{
    let total = records.len();
    let mut results = Vec::new();

    for record in records.into_iter().filter(|r| criteria.matches_record(r)) {
        let client = cache.resolve(source, record.client_id).await?;
        if criteria.matches_client(client.as_ref()) {
            results.push(EnrichedRecord::new(record, client));
        }
    }

    tracing::debug!(
        "[Incremental] {}/{} records kept, {} clients resolved",
        results.len(),
        total,
        cache.len()
    );

    Ok(results)
}
