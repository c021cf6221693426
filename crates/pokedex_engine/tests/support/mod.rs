#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use pokedex_core::{Entity, ListEntry, ListPage, Stat};
use pokedex_engine::{CatalogSource, DetailRef, FailureKind, FetchError};

pub fn entity(id: u32) -> Entity {
    Entity {
        id,
        name: format!("mon-{id}"),
        types: vec!["normal".into()],
        stats: vec![Stat {
            name: "hp".into(),
            value: 40 + id,
        }],
        abilities: vec!["run-away".into()],
        image: None,
        height: id,
        weight: id * 10,
    }
}

/// In-memory catalog with per-id latency, failures and call counting.
#[derive(Default)]
pub struct FakeSource {
    pub total: u64,
    pub delays: HashMap<u32, Duration>,
    pub failing: HashSet<u32>,
    pub page_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    pub completion_order: Mutex<Vec<u32>>,
}

impl FakeSource {
    pub fn with_total(total: u64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn completion_order(&self) -> Vec<u32> {
        self.completion_order.lock().unwrap().clone()
    }
}

fn id_of(reference: &DetailRef) -> u32 {
    reference
        .cache_key()
        .parse()
        .expect("fake refs are numeric")
}

#[async_trait::async_trait]
impl CatalogSource for FakeSource {
    async fn fetch_page(&self, page: u32) -> Result<ListPage, FetchError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        let first = (page - 1) * 20 + 1;
        let last = (first + 19).min(self.total as u32);
        Ok(ListPage {
            count: self.total,
            next: None,
            previous: None,
            results: (first..=last)
                .map(|id| ListEntry {
                    name: format!("mon-{id}"),
                    url: format!("https://pokeapi.test/api/v2/pokemon/{id}/"),
                })
                .collect(),
        })
    }

    async fn fetch_detail(&self, reference: &DetailRef) -> Result<Entity, FetchError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let id = id_of(reference);
        if let Some(delay) = self.delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        self.completion_order.lock().unwrap().push(id);
        if self.failing.contains(&id) {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: format!("boom {id}"),
            });
        }
        Ok(entity(id))
    }
}
