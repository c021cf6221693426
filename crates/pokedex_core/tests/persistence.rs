use std::collections::HashSet;

use pokedex_core::persist::{
    decode_favorites, encode_favorites, load_favorites, load_theme, save_favorites, save_theme,
    FAVORITES_KEY, THEME_KEY,
};
use pokedex_core::{update, AppState, Effect, Favorites, MemoryStore, Msg, StoreError, Theme};

fn init_logging() {
    pokedex_logging::initialize_for_tests();
}

#[test]
fn favorites_round_trip_through_store() {
    init_logging();
    let store = MemoryStore::new();
    let favorites = Favorites::from_ids([25, 1, 150]);

    save_favorites(&store, &favorites).unwrap();
    assert_eq!(store.raw(FAVORITES_KEY).as_deref(), Some("[25,1,150]"));

    let loaded = load_favorites(&store).unwrap();
    let original: HashSet<u32> = favorites.ids().iter().copied().collect();
    let restored: HashSet<u32> = loaded.ids().iter().copied().collect();
    assert_eq!(original, restored);
    assert_eq!(loaded, favorites);
}

#[test]
fn missing_key_loads_empty_set() {
    init_logging();
    let store = MemoryStore::new();
    assert!(load_favorites(&store).unwrap().is_empty());
    assert_eq!(load_theme(&store).unwrap(), Theme::Light);
}

#[test]
fn malformed_value_is_reported_as_corrupt() {
    init_logging();
    let store = MemoryStore::with_entry(FAVORITES_KEY, "{not json");
    let err = load_favorites(&store).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));

    assert!(decode_favorites("[1,\"two\"]").is_err());
    assert!(decode_favorites("[-1]").is_err());
}

#[test]
fn decoded_duplicates_are_dropped() {
    let favorites = decode_favorites("[3,3,1]").unwrap();
    assert_eq!(favorites.ids(), &[3, 1]);
    assert_eq!(encode_favorites(&favorites).unwrap(), "[3,1]");
}

#[test]
fn theme_is_stored_as_json_string() {
    let store = MemoryStore::new();
    save_theme(&store, Theme::Dark).unwrap();
    assert_eq!(store.raw(THEME_KEY).as_deref(), Some("\"dark\""));
    assert_eq!(load_theme(&store).unwrap(), Theme::Dark);
}

#[test]
fn every_toggle_emits_full_persist_effect() {
    init_logging();
    let store = MemoryStore::new();
    let mut state = AppState::new();

    for id in [4, 7, 4] {
        let (next, effects) = update(state, Msg::ToggleFavorite(id));
        state = next;
        let persisted = effects.iter().find_map(|effect| match effect {
            Effect::PersistFavorites { ids } => Some(ids.clone()),
            _ => None,
        });
        let ids = persisted.expect("persist effect on every toggle");
        save_favorites(&store, &Favorites::from_ids(ids)).unwrap();
    }

    assert_eq!(state.favorites().ids(), &[7]);
    assert_eq!(load_favorites(&store).unwrap().ids(), &[7]);
}

#[test]
fn restored_preferences_apply_to_state() {
    let (state, effects) = update(
        AppState::new(),
        Msg::RestorePreferences {
            favorites: Favorites::from_ids([1, 2]),
            theme: Theme::Dark,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.view().favourites_count, 2);
}
