use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::queries;
use crate::error::Result;
use crate::models::{BillingRecord, Client, RecordKind};

/// Remote store the filtering pass reads from
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_all_records(&self, kind: RecordKind) -> Result<Vec<BillingRecord>>;

    async fn fetch_all_clients(&self) -> Result<Vec<Client>>;

    /// `Ok(None)` means the client does not exist; it is not an error.
    async fn fetch_client_by_id(&self, client_id: i64) -> Result<Option<Client>>;

    async fn fetch_all_invoices(&self) -> Result<Vec<BillingRecord>> {
        self.fetch_all_records(RecordKind::Invoice).await
    }

    async fn fetch_all_quotations(&self) -> Result<Vec<BillingRecord>> {
        self.fetch_all_records(RecordKind::Quotation).await
    }
}

/// Postgres-backed record source
pub struct PgRecordSource {
    pool: PgPool,
}

impl PgRecordSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordSource for PgRecordSource {
    async fn fetch_all_records(&self, kind: RecordKind) -> Result<Vec<BillingRecord>> {
        let records = match kind {
            RecordKind::Invoice => queries::list_invoices(&self.pool).await?,
            RecordKind::Quotation => queries::list_quotations(&self.pool).await?,
        };
        tracing::debug!("Loaded {} {} records", records.len(), kind);
        Ok(records)
    }

    async fn fetch_all_clients(&self) -> Result<Vec<Client>> {
        Ok(queries::list_clients(&self.pool).await?)
    }

    async fn fetch_client_by_id(&self, client_id: i64) -> Result<Option<Client>> {
        Ok(queries::get_client(&self.pool, client_id).await?)
    }
}
