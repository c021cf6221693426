use crate::{EntityId, RequestId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a listing page and the details of every entry on it.
    LoadPage { request_id: RequestId, page: u32 },
    /// Fetch details for every favourite, in favourites order.
    LoadFavourites {
        request_id: RequestId,
        ids: Vec<EntityId>,
    },
    LoadDetail { request_id: RequestId, id: EntityId },
    /// Write the full favourites list to durable storage.
    PersistFavorites { ids: Vec<EntityId> },
    PersistTheme { theme: Theme },
}
