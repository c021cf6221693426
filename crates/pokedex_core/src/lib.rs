//! Pokédex core: pure state machine, catalog model and view-model helpers.
mod effect;
mod entity;
mod favorites;
mod filter;
mod msg;
mod pagination;
pub mod persist;
mod prefs;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use entity::{Entity, EntityId, ListEntry, ListPage, PageData, Stat};
pub use favorites::Favorites;
pub use filter::{filter_entities, is_known_type, FilterCriteria, KNOWN_TYPES};
pub use msg::Msg;
pub use pagination::{
    is_valid_page, page_for_key, page_numbers, page_offset, total_pages, NavKey, PageToken,
    PAGE_SIZE,
};
pub use persist::{KeyValueStore, MemoryStore, StoreError};
pub use prefs::{Theme, ViewMode};
pub use state::{AppState, LoadState, RequestId, Route};
pub use update::update;
pub use view_model::{
    ability_label, stat_grade, stat_percent, AppViewModel, CardView, ContentView, DetailView,
    ModalView, PaginationView, StatGrade, StatRow, MAX_STAT,
};
