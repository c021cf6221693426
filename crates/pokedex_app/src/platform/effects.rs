use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use pokedex_core::{Effect, KeyValueStore, Msg};
use pokedex_engine::{EngineEvent, EngineEvents, EngineHandle, FetchError, FetchSettings};
use pokedex_logging::{pokedex_info, pokedex_warn};

use super::input::Input;
use super::persistence::{persist_favorites, persist_theme};

pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<dyn KeyValueStore>,
}

impl EffectRunner {
    pub fn new(
        settings: FetchSettings,
        store: Arc<dyn KeyValueStore>,
        input_tx: mpsc::Sender<Input>,
    ) -> io::Result<Self> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self::with_engine(engine, store, input_tx))
    }

    /// Runner over an existing engine; completions are forwarded to `input_tx`.
    pub fn with_engine(
        engine: EngineHandle,
        store: Arc<dyn KeyValueStore>,
        input_tx: mpsc::Sender<Input>,
    ) -> Self {
        forward_events(engine.events(), input_tx);
        Self { engine, store }
    }

    /// Runs effects in order. Persistence happens before this returns.
    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadPage { request_id, page } => {
                    pokedex_info!("LoadPage request_id={} page={}", request_id, page);
                    self.engine.load_page(request_id, page);
                }
                Effect::LoadFavourites { request_id, ids } => {
                    pokedex_info!(
                        "LoadFavourites request_id={} ids={:?}",
                        request_id,
                        ids
                    );
                    self.engine.load_favourites(request_id, ids);
                }
                Effect::LoadDetail { request_id, id } => {
                    pokedex_info!("LoadDetail request_id={} id={}", request_id, id);
                    self.engine.load_detail(request_id, id);
                }
                Effect::PersistFavorites { ids } => {
                    pokedex_info!("PersistFavorites count={}", ids.len());
                    persist_favorites(self.store.as_ref(), &ids);
                }
                Effect::PersistTheme { theme } => {
                    pokedex_info!("PersistTheme theme={:?}", theme);
                    persist_theme(self.store.as_ref(), theme);
                }
            }
        }
    }
}

/// Ends when the engine stops or the session drops its inbox.
fn forward_events(events: EngineEvents, input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if input_tx.send(Input::Msg(map_event(event))).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageLoaded { request_id, result } => Msg::PageLoaded {
            request_id,
            result: result.map_err(describe_failure),
        },
        EngineEvent::FavouritesLoaded { request_id, result } => Msg::FavouritesLoaded {
            request_id,
            result: result.map_err(describe_failure),
        },
        EngineEvent::DetailLoaded { request_id, result } => Msg::DetailLoaded {
            request_id,
            result: result.map_err(describe_failure),
        },
    }
}

fn describe_failure(err: FetchError) -> String {
    pokedex_warn!("Request failed: {}", err);
    err.to_string()
}
