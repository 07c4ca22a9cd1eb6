use std::sync::Arc;

use shadowgrid::catalog::StoredGameCatalog;
use shadowgrid::game::{self, GameModel, SUSPENDED_SESSION};
use shadowgrid::store::{BlobStore, FileBlobStore};

#[tokio::test]
async fn save_load_and_browse_over_real_files() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn BlobStore> = Arc::new(FileBlobStore::new(dir.path()).unwrap());

    let mut rng = rand::thread_rng();
    let mut model = GameModel::new(store.clone(), game::new_game(9, 3, &mut rng));
    let original = model.table().clone();

    model.save_game("slot-one").await.unwrap();
    model.suspend().await.unwrap();

    // Loading rebuilds cells and derives the guard roster from the markers.
    model.start_new(5, 0, &mut rng);
    model.load_game("slot-one").await.unwrap();
    assert_eq!(model.table().size(), original.size());
    for row in 0..original.size() {
        for col in 0..original.size() {
            assert_eq!(model.table().cell(row, col), original.cell(row, col));
        }
    }
    assert_eq!(model.table().guards.len(), 3);

    // The autosave slot is on disk but never browsable.
    let catalog = StoredGameCatalog::new(Some(store.clone()), SUSPENDED_SESSION);
    catalog.refresh().await.unwrap();
    let entries = catalog.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "slot-one");

    // Raw blob follows the legacy layout: size token first, trailing space.
    let blob = store.read_text("slot-one").await.unwrap();
    assert!(blob.starts_with("9 "));
    assert!(blob.ends_with(' '));
    assert_eq!(blob.split(' ').count(), 1 + 81 + 1);
}

#[tokio::test]
async fn corrupt_save_fails_loading_and_preserves_session() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn BlobStore> = Arc::new(FileBlobStore::new(dir.path()).unwrap());
    store.write_text("broken", "5 . . .").await.unwrap();

    let mut rng = rand::thread_rng();
    let mut model = GameModel::new(store, game::new_game(6, 1, &mut rng));
    let before = model.table().clone();

    let err = model.load_game("broken").await.unwrap_err();
    assert_eq!(err.to_string(), "Loading failed");
    assert_eq!(model.table().size(), before.size());
    assert_eq!(model.table().count_marker(game::markers::GUARD), 1);
}
