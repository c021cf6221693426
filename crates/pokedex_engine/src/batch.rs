use futures_util::future::try_join_all;
use futures_util::{stream, StreamExt, TryStreamExt};
use pokedex_core::{Entity, EntityId, PageData};

use crate::{CatalogSource, DetailRef, FetchError};

/// Fetch every reference concurrently.
///
/// Results come back in input order whatever order the requests finish in.
/// Any single failure fails the whole batch. `limit` caps requests in flight.
pub async fn fetch_details_for(
    source: &dyn CatalogSource,
    refs: &[DetailRef],
    limit: Option<usize>,
) -> Result<Vec<Entity>, FetchError> {
    let requests: Vec<_> = refs
        .iter()
        .map(|reference| source.fetch_detail(reference))
        .collect();
    match limit {
        None => try_join_all(requests).await,
        Some(limit) => {
            stream::iter(requests)
                .buffered(limit.max(1))
                .try_collect()
                .await
        }
    }
}

/// A listing page with every entry resolved to its full record.
pub async fn load_page(
    source: &dyn CatalogSource,
    page: u32,
    limit: Option<usize>,
) -> Result<PageData, FetchError> {
    let listing = source.fetch_page(page).await?;
    let refs: Vec<DetailRef> = listing
        .results
        .iter()
        .map(|entry| DetailRef::Url(entry.url.clone()))
        .collect();
    let entities = fetch_details_for(source, &refs, limit).await?;
    Ok(PageData {
        page,
        count: listing.count,
        entities,
    })
}

/// Full records for the given favourites; an empty list issues no request.
pub async fn load_favourites(
    source: &dyn CatalogSource,
    ids: &[EntityId],
    limit: Option<usize>,
) -> Result<Vec<Entity>, FetchError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let refs: Vec<DetailRef> = ids.iter().copied().map(DetailRef::Id).collect();
    fetch_details_for(source, &refs, limit).await
}
