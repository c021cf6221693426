use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use pokedex_core::{EntityId, RequestId};
use pokedex_logging::{pokedex_debug, pokedex_warn};

use crate::batch::{load_favourites, load_page};
use crate::{CachedCatalog, CatalogSource, DetailRef, EngineEvent, FetchSettings, PokeApiClient};

enum EngineCommand {
    LoadPage {
        request_id: RequestId,
        page: u32,
    },
    LoadFavourites {
        request_id: RequestId,
        ids: Vec<EntityId>,
    },
    LoadDetail {
        request_id: RequestId,
        id: EntityId,
    },
}

/// Runs catalog requests on a background runtime and reports completions as events.
///
/// The engine thread stops once every handle is dropped; event receivers then
/// see the stream end.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    events: EngineEvents,
}

/// Receiving end of an engine's completions. Holds no command sender, so it
/// does not keep the engine alive.
#[derive(Clone)]
pub struct EngineEvents {
    rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineEvents {
    /// Blocks for the next completion; `None` once the engine has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        let rx = self.rx.lock().ok()?;
        rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        let rx = self.rx.lock().ok()?;
        rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        let rx = self.rx.lock().ok()?;
        rx.recv_timeout(timeout).ok()
    }
}

impl EngineHandle {
    /// Engine backed by the live catalog with a request cache.
    pub fn new(settings: FetchSettings) -> io::Result<Self> {
        let limit = settings.max_concurrent_details;
        let client = PokeApiClient::new(settings)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
        Self::with_source(Arc::new(CachedCatalog::new(client)), limit)
    }

    pub fn with_source(source: Arc<dyn CatalogSource>, limit: Option<usize>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(source.as_ref(), command, limit).await;
                    let _ = event_tx.send(event);
                });
            }
            pokedex_debug!("Engine command channel closed; shutting down");
        });

        Ok(Self {
            cmd_tx,
            events: EngineEvents {
                rx: Arc::new(Mutex::new(event_rx)),
            },
        })
    }

    /// A receiver for completions that can outlive this handle.
    pub fn events(&self) -> EngineEvents {
        self.events.clone()
    }

    pub fn load_page(&self, request_id: RequestId, page: u32) {
        self.send(EngineCommand::LoadPage { request_id, page });
    }

    pub fn load_favourites(&self, request_id: RequestId, ids: Vec<EntityId>) {
        self.send(EngineCommand::LoadFavourites { request_id, ids });
    }

    pub fn load_detail(&self, request_id: RequestId, id: EntityId) {
        self.send(EngineCommand::LoadDetail { request_id, id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.events.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.events.recv_timeout(timeout)
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            pokedex_warn!("Engine thread has stopped; command dropped");
        }
    }
}

async fn handle_command(
    source: &dyn CatalogSource,
    command: EngineCommand,
    limit: Option<usize>,
) -> EngineEvent {
    match command {
        EngineCommand::LoadPage { request_id, page } => {
            pokedex_debug!("LoadPage request_id={} page={}", request_id, page);
            let result = load_page(source, page, limit).await;
            EngineEvent::PageLoaded { request_id, result }
        }
        EngineCommand::LoadFavourites { request_id, ids } => {
            pokedex_debug!("LoadFavourites request_id={} count={}", request_id, ids.len());
            let result = load_favourites(source, &ids, limit).await;
            EngineEvent::FavouritesLoaded { request_id, result }
        }
        EngineCommand::LoadDetail { request_id, id } => {
            pokedex_debug!("LoadDetail request_id={} id={}", request_id, id);
            let result = source.fetch_detail(&DetailRef::Id(id)).await;
            EngineEvent::DetailLoaded { request_id, result }
        }
    }
}
