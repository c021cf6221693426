//! Key-value persistence port for user preferences.
//!
//! Values are stored as JSON text: favourites as an array of integers under
//! [`FAVORITES_KEY`], the theme as a string under [`THEME_KEY`]. There is no
//! schema version; a value that fails to decode is reported as
//! [`StoreError::Corrupt`] and callers fall back to defaults.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use crate::{EntityId, Favorites, Theme};

pub const FAVORITES_KEY: &str = "pokemonFavorites";
pub const THEME_KEY: &str = "pokemonTheme";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("stored value for {key} is malformed: {message}")]
    Corrupt { key: String, message: String },
    #[error("failed to encode value for {key}: {message}")]
    Encode { key: String, message: String },
}

/// Durable string storage addressed by key.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, used by tests and as a fallback when no data directory is usable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .lock()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Raw stored text, for assertions.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode_favorites(favorites: &Favorites) -> Result<String, StoreError> {
    serde_json::to_string(favorites.ids()).map_err(|err| StoreError::Encode {
        key: FAVORITES_KEY.to_string(),
        message: err.to_string(),
    })
}

pub fn decode_favorites(text: &str) -> Result<Favorites, StoreError> {
    let ids: Vec<EntityId> = serde_json::from_str(text).map_err(|err| StoreError::Corrupt {
        key: FAVORITES_KEY.to_string(),
        message: err.to_string(),
    })?;
    Ok(Favorites::from_ids(ids))
}

/// Load favourites; a missing key is an empty set.
pub fn load_favorites(store: &dyn KeyValueStore) -> Result<Favorites, StoreError> {
    match store.load(FAVORITES_KEY)? {
        Some(text) => decode_favorites(&text),
        None => Ok(Favorites::new()),
    }
}

pub fn save_favorites(store: &dyn KeyValueStore, favorites: &Favorites) -> Result<(), StoreError> {
    let text = encode_favorites(favorites)?;
    store.save(FAVORITES_KEY, &text)
}

pub fn load_theme(store: &dyn KeyValueStore) -> Result<Theme, StoreError> {
    match store.load(THEME_KEY)? {
        Some(text) => serde_json::from_str(&text).map_err(|err| StoreError::Corrupt {
            key: THEME_KEY.to_string(),
            message: err.to_string(),
        }),
        None => Ok(Theme::default()),
    }
}

pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<(), StoreError> {
    let text = serde_json::to_string(&theme).map_err(|err| StoreError::Encode {
        key: THEME_KEY.to_string(),
        message: err.to_string(),
    })?;
    store.save(THEME_KEY, &text)
}
