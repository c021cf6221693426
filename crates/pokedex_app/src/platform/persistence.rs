use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use pokedex_core::persist::{load_favorites, load_theme, save_favorites, save_theme};
use pokedex_core::{EntityId, Favorites, KeyValueStore, MemoryStore, Theme, ViewMode};
use pokedex_engine::{FetchSettings, FileStore};
use pokedex_logging::{pokedex_error, pokedex_info, pokedex_warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.ron";

/// Optional settings read from `config.ron` in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub api_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub max_concurrent_details: Option<usize>,
    pub view_mode: ViewMode,
}

impl AppConfig {
    /// Fetch settings from config, with `api_base` from the command line taking precedence.
    pub fn fetch_settings(&self, api_base: Option<&str>) -> FetchSettings {
        let mut settings = FetchSettings::default();
        if let Some(base) = api_base.or(self.api_base_url.as_deref()) {
            settings.base_url = base.to_string();
        }
        if let Some(secs) = self.request_timeout_secs {
            settings.request_timeout = Duration::from_secs(secs);
        }
        settings.max_concurrent_details = self.max_concurrent_details;
        settings
    }
}

pub(crate) fn load_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            pokedex_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            pokedex_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            pokedex_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

/// File store in `data_dir`, or an in-memory store when the directory is unusable.
pub(crate) fn open_store(data_dir: &Path) -> Arc<dyn KeyValueStore> {
    match FileStore::open(data_dir) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            pokedex_warn!(
                "Data directory {:?} unusable ({}); favourites will not be saved",
                data_dir,
                err
            );
            Arc::new(MemoryStore::new())
        }
    }
}

/// Favourites and theme from storage; anything unreadable falls back to defaults.
pub(crate) fn load_preferences(store: &dyn KeyValueStore) -> (Favorites, Theme) {
    let favorites = load_favorites(store).unwrap_or_else(|err| {
        pokedex_warn!("Ignoring stored favourites: {}", err);
        Favorites::new()
    });
    let theme = load_theme(store).unwrap_or_else(|err| {
        pokedex_warn!("Ignoring stored theme: {}", err);
        Theme::default()
    });
    pokedex_info!(
        "Loaded {} favourites, theme {:?}",
        favorites.len(),
        theme
    );
    (favorites, theme)
}

pub(crate) fn persist_favorites(store: &dyn KeyValueStore, ids: &[EntityId]) {
    let favorites = Favorites::from_ids(ids.iter().copied());
    if let Err(err) = save_favorites(store, &favorites) {
        pokedex_error!("Failed to save favourites: {}", err);
    }
}

pub(crate) fn persist_theme(store: &dyn KeyValueStore, theme: Theme) {
    if let Err(err) = save_theme(store, theme) {
        pokedex_error!("Failed to save theme: {}", err);
    }
}
