use crate::{
    is_known_type, is_valid_page, page_for_key, AppState, Effect, LoadState, Msg, Route,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::RestorePreferences { favorites, theme } => {
            state.restore(favorites, theme);
            Vec::new()
        }
        Msg::NavigateHome => {
            state.set_route(Route::Home);
            if matches!(state.listing(), LoadState::Idle) {
                let page = state.page();
                request_page(&mut state, page)
            } else {
                Vec::new()
            }
        }
        Msg::NavigateFavourites => {
            state.set_route(Route::Favourites);
            aggregate_favourites(&mut state)
        }
        Msg::PageRequested(page) => request_page(&mut state, page),
        Msg::KeyPressed(key) => {
            if state.route() != Route::Home {
                return (state, Vec::new());
            }
            match page_for_key(state.page(), state.total_pages(), key) {
                Some(page) => request_page(&mut state, page),
                None => Vec::new(),
            }
        }
        Msg::SearchChanged(search) => {
            state.set_search(search);
            Vec::new()
        }
        Msg::TypeSelected(tag) => {
            let tag = tag.trim().to_lowercase();
            if tag.is_empty() || is_known_type(&tag) {
                state.set_type_tag(tag);
            }
            Vec::new()
        }
        Msg::ToggleFavorite(id) => {
            state.toggle_favorite(id);
            let mut effects = vec![Effect::PersistFavorites {
                ids: state.favorites().ids().to_vec(),
            }];
            // The favourites page is keyed by the whole set, so it re-aggregates.
            if state.route() == Route::Favourites {
                effects.extend(aggregate_favourites(&mut state));
            }
            effects
        }
        Msg::CardSelected(id) => {
            let selected = state
                .visible_entities()
                .iter()
                .find(|entity| entity.id == id && state.criteria().matches(entity))
                .cloned();
            if let Some(entity) = selected {
                state.open_detail(entity);
            }
            Vec::new()
        }
        Msg::DetailRequested(id) => {
            let request_id = state.begin_detail(id);
            vec![Effect::LoadDetail { request_id, id }]
        }
        Msg::ModalClosed => {
            state.close_detail();
            Vec::new()
        }
        Msg::ViewModeToggled => {
            state.toggle_view_mode();
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.toggle_theme();
            vec![Effect::PersistTheme { theme }]
        }
        Msg::RetryRequested => retry_failed(&mut state),
        Msg::PageLoaded { request_id, result } => {
            state.apply_listing(request_id, result);
            Vec::new()
        }
        Msg::FavouritesLoaded { request_id, result } => {
            state.apply_favourites(request_id, result);
            Vec::new()
        }
        Msg::DetailLoaded { request_id, result } => {
            state.apply_detail(request_id, result);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn request_page(state: &mut AppState, page: u32) -> Vec<Effect> {
    let total = state.total_pages();
    // Before the first listing arrives the page count is unknown; only page 1 is reachable.
    let allowed = if total == 0 {
        page == 1
    } else {
        is_valid_page(page, total)
    };
    if !allowed {
        return Vec::new();
    }
    let request_id = state.begin_listing(page);
    vec![Effect::LoadPage { request_id, page }]
}

fn aggregate_favourites(state: &mut AppState) -> Vec<Effect> {
    if state.favorites().is_empty() {
        state.set_favourites_empty();
        return Vec::new();
    }
    let request_id = state.begin_favourites();
    vec![Effect::LoadFavourites {
        request_id,
        ids: state.favorites().ids().to_vec(),
    }]
}

fn retry_failed(state: &mut AppState) -> Vec<Effect> {
    let mut effects = Vec::new();
    if state.detail().is_failed() {
        if let Some(id) = state.detail_id() {
            let request_id = state.begin_detail(id);
            effects.push(Effect::LoadDetail { request_id, id });
        }
    }
    match state.route() {
        Route::Home if state.listing().is_failed() => {
            let page = state.page();
            let request_id = state.begin_listing(page);
            effects.push(Effect::LoadPage { request_id, page });
        }
        Route::Favourites if state.favourites_listing().is_failed() => {
            effects.extend(aggregate_favourites(state));
        }
        _ => {}
    }
    effects
}
