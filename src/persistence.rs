//! Session load/save path.

use std::sync::Arc;

use tracing::{debug, info};

use crate::codec;
use crate::error::PersistenceError;
use crate::store::BlobStore;
use crate::table::GameTable;

/// Reads and writes whole game sessions through a [`BlobStore`].
///
/// Every failure along either path, I/O or wire format, surfaces as a single
/// coarse [`PersistenceError`] kind.
pub struct GameDataAccess {
    store: Arc<dyn BlobStore>,
    guard_marker: &'static str,
}

impl GameDataAccess {
    pub fn new(store: Arc<dyn BlobStore>, guard_marker: &'static str) -> Self {
        Self {
            store,
            guard_marker,
        }
    }

    pub async fn load(&self, name: &str) -> Result<GameTable, PersistenceError> {
        let blob = self
            .store
            .read_text(name)
            .await
            .map_err(|e| PersistenceError::Load(e.into()))?;
        let table = codec::decode(&blob, self.guard_marker)
            .map_err(|e| PersistenceError::Load(e.into()))?;
        info!(
            name = %name,
            size = table.size(),
            guards = table.guards.len(),
            "loaded session"
        );
        Ok(table)
    }

    pub async fn save(&self, name: &str, table: &GameTable) -> Result<(), PersistenceError> {
        let blob = codec::encode(table);
        self.store
            .write_text(name, &blob)
            .await
            .map_err(|e| PersistenceError::Save(e.into()))?;
        debug!(name = %name, size = table.size(), "saved session");
        Ok(())
    }
}
