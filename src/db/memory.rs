use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::db::RecordSource;
use crate::error::{RecordError, Result};
use crate::models::{BillingRecord, Client, RecordKind};

/// Fixed in-memory snapshot, counting every by-id lookup
#[derive(Debug, Default)]
pub struct InMemorySource {
    invoices: Vec<BillingRecord>,
    quotations: Vec<BillingRecord>,
    clients: Vec<Client>,
    failing_clients: HashSet<i64>,
    unavailable: bool,
    lookups: AtomicUsize,
}

impl InMemorySource {
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            clients,
            ..Self::default()
        }
    }

    pub fn with_invoices(mut self, invoices: Vec<BillingRecord>) -> Self {
        self.invoices = invoices;
        self
    }

    pub fn with_quotations(mut self, quotations: Vec<BillingRecord>) -> Self {
        self.quotations = quotations;
        self
    }

    /// Lookups for this client id fail with a source error
    pub fn with_failing_client(mut self, client_id: i64) -> Self {
        self.failing_clients.insert(client_id);
        self
    }

    /// Every bulk read fails with a source error
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Number of `fetch_client_by_id` calls so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(RecordError::Source("record source unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordSource for InMemorySource {
    async fn fetch_all_records(&self, kind: RecordKind) -> Result<Vec<BillingRecord>> {
        self.check_available()?;
        Ok(match kind {
            RecordKind::Invoice => self.invoices.clone(),
            RecordKind::Quotation => self.quotations.clone(),
        })
    }

    async fn fetch_all_clients(&self) -> Result<Vec<Client>> {
        self.check_available()?;
        Ok(self.clients.clone())
    }

    async fn fetch_client_by_id(&self, client_id: i64) -> Result<Option<Client>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.failing_clients.contains(&client_id) {
            return Err(RecordError::Source(format!("lookup of client {} failed", client_id)));
        }
        Ok(self.clients.iter().find(|c| c.id == client_id).cloned())
    }
}
