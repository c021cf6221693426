use crate::{Entity, EntityId, Favorites, NavKey, PageData, RequestId, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Restore preferences loaded from durable storage at start-up.
    RestorePreferences { favorites: Favorites, theme: Theme },
    /// User opened the listing view ("/").
    NavigateHome,
    /// User opened the favourites view ("/favourites").
    NavigateFavourites,
    /// User asked for a specific listing page.
    PageRequested(u32),
    /// Arrow key pressed.
    KeyPressed(NavKey),
    /// User edited the search box.
    SearchChanged(String),
    /// User picked a type from the selector; empty clears the filter.
    TypeSelected(String),
    /// User clicked the star on a card.
    ToggleFavorite(EntityId),
    /// User clicked a visible card.
    CardSelected(EntityId),
    /// Open the detail modal for any id, fetching it if needed.
    DetailRequested(EntityId),
    ModalClosed,
    ViewModeToggled,
    ThemeToggled,
    /// User pressed "Try again" after a failed load.
    RetryRequested,
    /// Engine completion for a listing page.
    PageLoaded {
        request_id: RequestId,
        result: Result<PageData, String>,
    },
    /// Engine completion for the favourites batch.
    FavouritesLoaded {
        request_id: RequestId,
        result: Result<Vec<Entity>, String>,
    },
    /// Engine completion for a single detail.
    DetailLoaded {
        request_id: RequestId,
        result: Result<Entity, String>,
    },
    /// Fallback for unrecognised input.
    NoOp,
}
