use std::fs;

use pokedex_core::persist::{load_favorites, save_favorites, FAVORITES_KEY};
use pokedex_core::{Favorites, KeyValueStore, StoreError};
use pokedex_engine::{FileStore, PersistError};
use tempfile::TempDir;

fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn open_creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("data");
    assert!(!new_dir.exists());
    let store = FileStore::open(&new_dir).unwrap();
    assert!(new_dir.is_dir());
    assert_eq!(store.dir(), new_dir.as_path());
    assert!(file_names(&new_dir).is_empty());
}

#[test]
fn open_rejects_a_file_path() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    assert!(matches!(
        FileStore::open(&file_path),
        Err(PersistError::NotADirectory { .. })
    ));
}

#[test]
fn save_replaces_value_without_leftovers() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();

    store.save("value", "[1]").unwrap();
    store.save("value", "[1,2]").unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("value.json")).unwrap(),
        "[1,2]"
    );
    assert_eq!(file_names(temp.path()), vec!["value.json".to_string()]);
}

#[test]
fn save_does_not_recreate_a_removed_directory() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("state");
    let store = FileStore::open(&dir).unwrap();
    fs::remove_dir(&dir).unwrap();

    assert!(matches!(
        store.save(FAVORITES_KEY, "[1]"),
        Err(StoreError::Unavailable(_))
    ));
    assert!(!dir.exists());
}

#[test]
fn file_store_round_trips_favourites() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path().join("state")).unwrap();

    assert!(load_favorites(&store).unwrap().is_empty());
    save_favorites(&store, &Favorites::from_ids([6, 3, 9])).unwrap();

    let on_disk = fs::read_to_string(temp.path().join("state").join("pokemonFavorites.json"))
        .unwrap();
    assert_eq!(on_disk, "[6,3,9]");

    // A fresh store over the same directory sees the same set.
    let reopened = FileStore::open(temp.path().join("state")).unwrap();
    assert_eq!(load_favorites(&reopened).unwrap().ids(), &[6, 3, 9]);
}

#[test]
fn corrupt_file_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pokemonFavorites.json"), "[1,").unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    assert!(matches!(
        load_favorites(&store),
        Err(StoreError::Corrupt { .. })
    ));
    assert_eq!(
        store.load(FAVORITES_KEY).unwrap().as_deref(),
        Some("[1,")
    );
}

#[test]
fn rejects_keys_that_are_not_plain_names() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    assert!(store.save("../escape", "1").is_err());
    assert!(store.load("").is_err());
    assert!(!temp.path().join("../escape.json").exists());
}
