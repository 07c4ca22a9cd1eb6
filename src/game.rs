//! Game-logic boundary: cell markers, the new-game generator, and the model
//! owning the active session.
//!
//! Guard movement and vision-cone logic live elsewhere; this module only
//! supplies what the persistence core needs from the game side.

use std::sync::Arc;

use rand::Rng;
use tracing::info;

use crate::error::PersistenceError;
use crate::persistence::GameDataAccess;
use crate::store::BlobStore;
use crate::table::GameTable;

/// Cell markers. The persistence core treats all of these opaquely except
/// [`markers::GUARD`].
pub mod markers {
    pub const FLOOR: &str = ".";
    pub const WALL: &str = "#";
    pub const EXIT: &str = "E";
    pub const GUARD: &str = "G";
    pub const PLAYER: &str = "P";
}

/// Session name reserved for automatic suspend/resume. Never listed in the
/// browsable catalog.
pub const SUSPENDED_SESSION: &str = "SuspendedGame";

/// Procedural new-game grid: walled border, player top-left, exit
/// bottom-right, guards scattered over free floor cells.
///
/// The guard roster stays empty; it is only rebuilt when a session is
/// decoded.
pub fn new_game<R: Rng>(size: usize, guard_count: usize, rng: &mut R) -> GameTable {
    let size = size.max(4);
    let interior = (size - 2) * (size - 2);
    let guard_count = guard_count.min(interior - 2);

    let mut table = GameTable::new(size, markers::FLOOR);
    for i in 0..size {
        table.set_cell(0, i, markers::WALL);
        table.set_cell(size - 1, i, markers::WALL);
        table.set_cell(i, 0, markers::WALL);
        table.set_cell(i, size - 1, markers::WALL);
    }
    table.set_cell(1, 1, markers::PLAYER);
    table.set_cell(size - 2, size - 2, markers::EXIT);

    let mut placed = 0;
    while placed < guard_count {
        let row = rng.gen_range(1..size - 1);
        let col = rng.gen_range(1..size - 1);
        if table.cell(row, col) == markers::FLOOR {
            table.set_cell(row, col, markers::GUARD);
            placed += 1;
        }
    }
    table
}

/// The single active game session, exclusive owner of its table.
pub struct GameModel {
    table: GameTable,
    access: GameDataAccess,
}

impl GameModel {
    pub fn new(store: Arc<dyn BlobStore>, table: GameTable) -> Self {
        Self {
            table,
            access: GameDataAccess::new(store, markers::GUARD),
        }
    }

    pub fn table(&self) -> &GameTable {
        &self.table
    }

    /// Replace the current session with a freshly generated one.
    pub fn start_new<R: Rng>(&mut self, size: usize, guard_count: usize, rng: &mut R) {
        self.table = new_game(size, guard_count, rng);
        info!(size = self.table.size(), guards = guard_count, "new game started");
    }

    /// Load the named save, replacing the current table wholesale. On failure
    /// the current table is left untouched.
    pub async fn load_game(&mut self, name: &str) -> Result<(), PersistenceError> {
        let table = self.access.load(name).await?;
        self.table = table;
        Ok(())
    }

    /// Write the current table under the given name, unconditionally
    /// replacing any existing save.
    pub async fn save_game(&self, name: &str) -> Result<(), PersistenceError> {
        self.access.save(name, &self.table).await
    }

    /// Write the autosave slot used across suspend/resume.
    pub async fn suspend(&self) -> Result<(), PersistenceError> {
        self.save_game(SUSPENDED_SESSION).await
    }

    /// Restore the autosave slot.
    pub async fn resume(&mut self) -> Result<(), PersistenceError> {
        self.load_game(SUSPENDED_SESSION).await
    }
}
