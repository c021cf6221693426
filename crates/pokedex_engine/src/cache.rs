//! Request cache in front of a [`CatalogSource`].
//!
//! Successful results are kept for the life of the cache, keyed by page number
//! or by [`DetailRef::cache_key`]. Concurrent calls for the same key share one
//! upstream request. Failures are not stored, so the next call retries.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use pokedex_core::{Entity, ListPage};
use pokedex_logging::pokedex_trace;
use tokio::sync::OnceCell;

use crate::{CatalogSource, DetailRef, FetchError};

type CacheMap<K, V> = Mutex<HashMap<K, Arc<OnceCell<V>>>>;

pub struct CachedCatalog<S> {
    inner: S,
    pages: CacheMap<u32, ListPage>,
    details: CacheMap<String, Entity>,
}

impl<S: CatalogSource> CachedCatalog<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pages: Mutex::new(HashMap::new()),
            details: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn is_page_cached(&self, page: u32) -> bool {
        is_cached(&self.pages, &page)
    }

    pub fn is_detail_cached(&self, reference: &DetailRef) -> bool {
        is_cached(&self.details, &reference.cache_key())
    }
}

fn cell_for<K: Hash + Eq, V>(map: &CacheMap<K, V>, key: K) -> Arc<OnceCell<V>> {
    let mut guard = map.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.entry(key).or_default().clone()
}

fn is_cached<K: Hash + Eq, V>(map: &CacheMap<K, V>, key: &K) -> bool {
    let guard = map.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.get(key).is_some_and(|cell| cell.initialized())
}

async fn cached<V, F, Fut>(cell: Arc<OnceCell<V>>, label: &str, fetch: F) -> Result<V, FetchError>
where
    V: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, FetchError>>,
{
    if let Some(value) = cell.get() {
        pokedex_trace!("cache hit {}", label);
        return Ok(value.clone());
    }
    cell.get_or_try_init(fetch).await.cloned()
}

#[async_trait::async_trait]
impl<S: CatalogSource> CatalogSource for CachedCatalog<S> {
    async fn fetch_page(&self, page: u32) -> Result<ListPage, FetchError> {
        let cell = cell_for(&self.pages, page);
        let label = format!("page {page}");
        cached(cell, &label, || self.inner.fetch_page(page)).await
    }

    async fn fetch_detail(&self, reference: &DetailRef) -> Result<Entity, FetchError> {
        let key = reference.cache_key();
        let label = format!("detail {key}");
        let cell = cell_for(&self.details, key);
        cached(cell, &label, || self.inner.fetch_detail(reference)).await
    }
}
