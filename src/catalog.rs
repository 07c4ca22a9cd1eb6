//! Time-sorted catalog of stored sessions.

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::debug;

use crate::store::BlobStore;

/// Catalog record for one stored session. Derived entirely from store
/// metadata and recreated on every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGameEntry {
    pub name: String,
    pub modified: DateTime<Utc>,
}

/// In-memory view of the sessions available in the store, most recent first.
///
/// The reserved autosave slot never appears. The entry list is replaced
/// wholesale on each refresh and published over a watch channel, so readers
/// observe either the old list or the new one, never a partial state.
pub struct StoredGameCatalog {
    store: Option<Arc<dyn BlobStore>>,
    reserved: &'static str,
    entries: watch::Sender<Vec<StoredGameEntry>>,
}

impl StoredGameCatalog {
    pub fn new(store: Option<Arc<dyn BlobStore>>, reserved: &'static str) -> Self {
        let (entries, _) = watch::channel(Vec::new());
        Self {
            store,
            reserved,
            entries,
        }
    }

    /// Snapshot of the currently published entries.
    pub fn entries(&self) -> Vec<StoredGameEntry> {
        self.entries.borrow().clone()
    }

    /// Change signal; notified once per successful refresh.
    pub fn subscribe(&self) -> watch::Receiver<Vec<StoredGameEntry>> {
        self.entries.subscribe()
    }

    /// Rebuild the catalog from the store.
    ///
    /// Without a configured store this is a no-op and nothing is emitted.
    /// Any I/O error aborts the rebuild before publication, leaving the
    /// previous entries in place.
    pub async fn refresh(&self) -> Result<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };

        let mut fresh = Vec::new();
        for name in store.list_names().await? {
            if name == self.reserved {
                continue;
            }
            let modified = store.modified_time(&name).await?;
            fresh.push(StoredGameEntry { name, modified });
        }
        // Stable sort: entries with equal timestamps keep their input order.
        fresh.sort_by(|a, b| b.modified.cmp(&a.modified));

        debug!(entries = fresh.len(), "catalog refreshed");
        self.entries.send_replace(fresh);
        Ok(())
    }
}
