use std::collections::HashMap;

use crate::db::RecordSource;
use crate::error::Result;
use crate::models::Client;

/// Client lookups memoized for a single filtering pass
///
/// A cached `None` is a completed lookup that found nothing and is never
/// fetched again. Failed lookups are not cached. Build a fresh cache per pass.
#[derive(Debug, Default)]
pub struct ClientCache {
    entries: HashMap<i64, Option<Client>>,
}

impl ClientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate from a full client listing
    pub fn seed(&mut self, clients: impl IntoIterator<Item = Client>) {
        for client in clients {
            self.entries.insert(client.id, Some(client));
        }
    }

    pub fn insert(&mut self, client_id: i64, client: Option<Client>) {
        self.entries.insert(client_id, client);
    }

    pub fn contains(&self, client_id: i64) -> bool {
        self.entries.contains_key(&client_id)
    }

    /// Cached client, `None` when not found or never looked up
    pub fn resolved(&self, client_id: i64) -> Option<Client> {
        self.entries.get(&client_id).cloned().flatten()
    }

    /// Cached value, or exactly one remote fetch on first use
    pub async fn resolve<S>(&mut self, source: &S, client_id: i64) -> Result<Option<Client>>
    where
        S: RecordSource + ?Sized,
    {
        if let Some(cached) = self.entries.get(&client_id) {
            return Ok(cached.clone());
        }

        let client = source.fetch_client_by_id(client_id).await?;
        self.entries.insert(client_id, client.clone());
        Ok(client)
    }

    /// Drop everything; call when the client collection may have changed
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
