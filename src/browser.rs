//! Browsing controller for stored sessions.

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tracing::warn;

use crate::catalog::{StoredGameCatalog, StoredGameEntry};

/// Intent forwarded to whoever owns the active game session. The browser
/// performs no I/O itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseIntent {
    Load(String),
    Save(String),
}

/// One browsable row, mirroring a catalog entry 1:1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseEntry {
    pub name: String,
    pub modified: DateTime<Utc>,
}

/// Exposes the catalog to the surrounding application and forwards load/save
/// intents for a selected entry.
pub struct StoredGameBrowser {
    catalog_rx: watch::Receiver<Vec<StoredGameEntry>>,
    intents: mpsc::UnboundedSender<BrowseIntent>,
    entries: Vec<BrowseEntry>,
}

impl StoredGameBrowser {
    pub fn new(catalog: &StoredGameCatalog, intents: mpsc::UnboundedSender<BrowseIntent>) -> Self {
        let mut browser = Self {
            catalog_rx: catalog.subscribe(),
            intents,
            entries: Vec::new(),
        };
        browser.rebuild();
        browser
    }

    /// Pick up a pending catalog change, if any. Returns whether the entry
    /// list was rebuilt.
    pub fn sync(&mut self) -> bool {
        let changed = self.catalog_rx.has_changed().unwrap_or(false);
        if changed {
            self.rebuild();
        }
        changed
    }

    pub fn entries(&self) -> &[BrowseEntry] {
        &self.entries
    }

    /// Ask the session owner to load the named save.
    pub fn request_load(&self, name: &str) {
        self.forward(BrowseIntent::Load(name.to_string()));
    }

    /// Ask the session owner to overwrite (or create) the named save.
    pub fn request_save(&self, name: &str) {
        self.forward(BrowseIntent::Save(name.to_string()));
    }

    // Rows are discarded and recreated from scratch on every change.
    fn rebuild(&mut self) {
        let entries: Vec<BrowseEntry> = self
            .catalog_rx
            .borrow_and_update()
            .iter()
            .map(|entry| BrowseEntry {
                name: entry.name.clone(),
                modified: entry.modified,
            })
            .collect();
        self.entries = entries;
    }

    fn forward(&self, intent: BrowseIntent) {
        if self.intents.send(intent).is_err() {
            warn!("browse intent dropped: no receiver");
        }
    }
}
