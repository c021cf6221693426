use crate::{Entity, EntityId, Favorites, FilterCriteria, PageData, Theme, ViewMode};

/// Identifies one load so that superseded completions can be discarded.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Favourites,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Favourites => "/favourites",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    route: Route,
    page: u32,
    total_pages: u32,
    listing: LoadState<PageData>,
    favourites: LoadState<Vec<Entity>>,
    detail: LoadState<Entity>,
    /// Id the modal was last requested for, kept for retries.
    detail_id: Option<EntityId>,
    criteria: FilterCriteria,
    view_mode: ViewMode,
    theme: Theme,
    favorites: Favorites,
    next_request_id: RequestId,
    pending_listing: Option<RequestId>,
    pending_favourites: Option<RequestId>,
    pending_detail: Option<RequestId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Home,
            page: 1,
            total_pages: 0,
            listing: LoadState::Idle,
            favourites: LoadState::Idle,
            detail: LoadState::Idle,
            detail_id: None,
            criteria: FilterCriteria::default(),
            view_mode: ViewMode::default(),
            theme: Theme::default(),
            favorites: Favorites::new(),
            next_request_id: 1,
            pending_listing: None,
            pending_favourites: None,
            pending_detail: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn listing(&self) -> &LoadState<PageData> {
        &self.listing
    }

    pub fn favourites_listing(&self) -> &LoadState<Vec<Entity>> {
        &self.favourites
    }

    pub fn detail(&self) -> &LoadState<Entity> {
        &self.detail
    }

    /// True while any load issued by this state has not completed.
    pub fn is_loading(&self) -> bool {
        self.pending_listing.is_some()
            || self.pending_favourites.is_some()
            || self.pending_detail.is_some()
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Entities currently on screen for the active route, before filtering.
    pub(crate) fn visible_entities(&self) -> &[Entity] {
        let entities = match self.route {
            Route::Home => self.listing.loaded().map(|data| data.entities.as_slice()),
            Route::Favourites => self.favourites.loaded().map(Vec::as_slice),
        };
        entities.unwrap_or(&[])
    }

    pub(crate) fn restore(&mut self, favorites: Favorites, theme: Theme) {
        self.favorites = favorites;
        self.theme = theme;
        self.mark_dirty();
    }

    pub(crate) fn set_route(&mut self, route: Route) {
        self.route = route;
        self.mark_dirty();
    }

    pub(crate) fn set_search(&mut self, search: String) {
        self.criteria.search = search;
        self.mark_dirty();
    }

    pub(crate) fn set_type_tag(&mut self, type_tag: String) {
        self.criteria.type_tag = type_tag;
        self.mark_dirty();
    }

    pub(crate) fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
        self.mark_dirty();
    }

    pub(crate) fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.mark_dirty();
        self.theme
    }

    pub(crate) fn toggle_favorite(&mut self, id: EntityId) {
        self.favorites.toggle(id);
        self.mark_dirty();
    }

    fn next_request(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub(crate) fn begin_listing(&mut self, page: u32) -> RequestId {
        let request_id = self.next_request();
        self.page = page;
        self.listing = LoadState::Loading;
        self.pending_listing = Some(request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn begin_favourites(&mut self) -> RequestId {
        let request_id = self.next_request();
        self.favourites = LoadState::Loading;
        self.pending_favourites = Some(request_id);
        self.mark_dirty();
        request_id
    }

    /// Favourites page with nothing to fetch.
    pub(crate) fn set_favourites_empty(&mut self) {
        self.favourites = LoadState::Loaded(Vec::new());
        self.pending_favourites = None;
        self.mark_dirty();
    }

    pub(crate) fn begin_detail(&mut self, id: EntityId) -> RequestId {
        let request_id = self.next_request();
        self.detail = LoadState::Loading;
        self.detail_id = Some(id);
        self.pending_detail = Some(request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn open_detail(&mut self, entity: Entity) {
        self.detail_id = Some(entity.id);
        self.detail = LoadState::Loaded(entity);
        self.pending_detail = None;
        self.mark_dirty();
    }

    pub(crate) fn close_detail(&mut self) {
        self.detail = LoadState::Idle;
        self.detail_id = None;
        self.pending_detail = None;
        self.mark_dirty();
    }

    pub(crate) fn detail_id(&self) -> Option<EntityId> {
        self.detail_id
    }

    /// Apply a listing completion; returns false when it was superseded.
    pub(crate) fn apply_listing(
        &mut self,
        request_id: RequestId,
        result: Result<PageData, String>,
    ) -> bool {
        if self.pending_listing != Some(request_id) {
            return false;
        }
        self.pending_listing = None;
        self.listing = match result {
            Ok(data) => {
                self.total_pages = crate::total_pages(data.count);
                LoadState::Loaded(data)
            }
            Err(message) => LoadState::Failed(message),
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_favourites(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<Entity>, String>,
    ) -> bool {
        if self.pending_favourites != Some(request_id) {
            return false;
        }
        self.pending_favourites = None;
        self.favourites = match result {
            Ok(entities) => LoadState::Loaded(entities),
            Err(message) => LoadState::Failed(message),
        };
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_detail(
        &mut self,
        request_id: RequestId,
        result: Result<Entity, String>,
    ) -> bool {
        if self.pending_detail != Some(request_id) {
            return false;
        }
        self.pending_detail = None;
        self.detail = match result {
            Ok(entity) => LoadState::Loaded(entity),
            Err(message) => LoadState::Failed(message),
        };
        self.mark_dirty();
        true
    }
}
