//! Pokédex engine: catalog fetching, request cache and durable storage.
mod batch;
mod cache;
mod engine;
mod fetch;
mod persist;
mod types;
mod wire;

pub use batch::{fetch_details_for, load_favourites, load_page};
pub use cache::CachedCatalog;
pub use engine::{EngineEvents, EngineHandle};
pub use fetch::{CatalogSource, DetailRef, FetchSettings, PokeApiClient, DEFAULT_BASE_URL};
pub use persist::{FileStore, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError};
