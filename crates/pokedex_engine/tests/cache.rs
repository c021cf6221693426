mod support;

use std::sync::Arc;
use std::time::Duration;

use pokedex_engine::{CachedCatalog, CatalogSource, DetailRef};
use support::FakeSource;

#[tokio::test]
async fn repeated_page_requests_hit_upstream_once() {
    let cache = CachedCatalog::new(FakeSource::with_total(100));
    let first = cache.fetch_page(2).await.unwrap();
    let second = cache.fetch_page(2).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.inner().page_calls(), 1);
    assert!(cache.is_page_cached(2));
    assert!(!cache.is_page_cached(3));

    cache.fetch_page(3).await.unwrap();
    assert_eq!(cache.inner().page_calls(), 2);
}

#[tokio::test]
async fn id_and_url_references_share_an_entry() {
    let cache = CachedCatalog::new(FakeSource::with_total(100));
    cache
        .fetch_detail(&DetailRef::Url(
            "https://pokeapi.test/api/v2/pokemon/25/".into(),
        ))
        .await
        .unwrap();
    let by_id = cache.fetch_detail(&DetailRef::Id(25)).await.unwrap();
    assert_eq!(by_id.id, 25);
    assert_eq!(cache.inner().detail_calls(), 1);
    assert!(cache.is_detail_cached(&DetailRef::Id(25)));
}

#[tokio::test]
async fn failures_are_not_cached() {
    let mut source = FakeSource::with_total(100);
    source.failing.insert(9);
    let cache = CachedCatalog::new(source);

    assert!(cache.fetch_detail(&DetailRef::Id(9)).await.is_err());
    assert!(cache.fetch_detail(&DetailRef::Id(9)).await.is_err());
    assert_eq!(cache.inner().detail_calls(), 2);
    assert!(!cache.is_detail_cached(&DetailRef::Id(9)));
}

#[tokio::test]
async fn concurrent_identical_requests_are_deduplicated() {
    let mut source = FakeSource::with_total(100);
    source.delays.insert(1, Duration::from_millis(50));
    let cache = Arc::new(CachedCatalog::new(source));

    let a = tokio::spawn({
        let cache = cache.clone();
        async move { cache.fetch_detail(&DetailRef::Id(1)).await }
    });
    let b = tokio::spawn({
        let cache = cache.clone();
        async move { cache.fetch_detail(&DetailRef::Id(1)).await }
    });
    let (a, b) = (a.await.unwrap().unwrap(), b.await.unwrap().unwrap());
    assert_eq!(a, b);
    assert_eq!(cache.inner().detail_calls(), 1);
}
