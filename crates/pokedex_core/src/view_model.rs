use crate::{
    filter_entities, page_numbers, AppState, Entity, EntityId, FilterCriteria, LoadState,
    PageToken, Route, Theme, ViewMode,
};

/// Highest base stat any entity can have; stat bars are scaled against it.
pub const MAX_STAT: u32 = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub route: Route,
    pub theme: Theme,
    pub view_mode: ViewMode,
    pub favourites_count: usize,
    pub criteria: FilterCriteria,
    pub content: ContentView,
    /// Only present on the listing route once the page count is known.
    pub pagination: Option<PaginationView>,
    pub modal: Option<ModalView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Loading,
    Failed { message: String },
    Cards(Vec<CardView>),
    /// Entities exist but none pass the filter.
    NoMatches,
    /// The favourites set itself is empty.
    NoFavourites,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: EntityId,
    pub number_label: String,
    pub name: String,
    pub types: Vec<String>,
    pub image: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: u32,
    pub total: u32,
    pub tokens: Vec<PageToken>,
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    Loading,
    Failed { message: String },
    Detail(DetailView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: EntityId,
    pub number_label: String,
    pub name: String,
    pub types: Vec<String>,
    pub image: Option<String>,
    pub stats: Vec<StatRow>,
    pub abilities: Vec<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub name: String,
    pub value: u32,
    pub percent: u8,
    pub grade: StatGrade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatGrade {
    Excellent,
    Good,
    Fair,
    Low,
}

impl AppState {
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            route: self.route(),
            theme: self.theme(),
            view_mode: self.view_mode(),
            favourites_count: self.favorites().len(),
            criteria: self.criteria().clone(),
            content: self.content_view(),
            pagination: self.pagination_view(),
            modal: self.modal_view(),
        }
    }

    fn content_view(&self) -> ContentView {
        match self.route() {
            Route::Home => match self.listing() {
                LoadState::Idle | LoadState::Loading => ContentView::Loading,
                LoadState::Failed(message) => ContentView::Failed {
                    message: message.clone(),
                },
                LoadState::Loaded(data) => self.cards(&data.entities),
            },
            Route::Favourites => {
                // The empty branch does not depend on any load.
                if self.favorites().is_empty() {
                    return ContentView::NoFavourites;
                }
                match self.favourites_listing() {
                    LoadState::Idle | LoadState::Loading => ContentView::Loading,
                    LoadState::Failed(message) => ContentView::Failed {
                        message: message.clone(),
                    },
                    LoadState::Loaded(entities) => self.cards(entities),
                }
            }
        }
    }

    fn cards(&self, entities: &[Entity]) -> ContentView {
        let cards: Vec<CardView> = filter_entities(entities, self.criteria())
            .into_iter()
            .map(|entity| CardView {
                id: entity.id,
                number_label: entity.number_label(),
                name: entity.name.clone(),
                types: entity.types.clone(),
                image: entity.image.clone(),
                is_favorite: self.favorites().contains(entity.id),
            })
            .collect();
        if cards.is_empty() {
            ContentView::NoMatches
        } else {
            ContentView::Cards(cards)
        }
    }

    fn pagination_view(&self) -> Option<PaginationView> {
        if self.route() != Route::Home || self.total_pages() == 0 {
            return None;
        }
        let current = self.page();
        let total = self.total_pages();
        Some(PaginationView {
            current,
            total,
            tokens: page_numbers(current, total),
            can_prev: current > 1,
            can_next: current < total,
        })
    }

    fn modal_view(&self) -> Option<ModalView> {
        match self.detail() {
            LoadState::Idle => None,
            LoadState::Loading => Some(ModalView::Loading),
            LoadState::Failed(message) => Some(ModalView::Failed {
                message: message.clone(),
            }),
            LoadState::Loaded(entity) => Some(ModalView::Detail(DetailView {
                id: entity.id,
                number_label: entity.number_label(),
                name: entity.name.clone(),
                types: entity.types.clone(),
                image: entity.image.clone(),
                stats: entity
                    .stats
                    .iter()
                    .map(|stat| StatRow {
                        name: stat.name.clone(),
                        value: stat.value,
                        percent: stat_percent(stat.value),
                        grade: stat_grade(stat.value),
                    })
                    .collect(),
                abilities: entity
                    .abilities
                    .iter()
                    .map(String::as_str)
                    .map(ability_label)
                    .collect(),
                height_m: entity.height_m(),
                weight_kg: entity.weight_kg(),
                is_favorite: self.favorites().contains(entity.id),
            })),
        }
    }
}

pub fn stat_percent(value: u32) -> u8 {
    let capped = value.min(MAX_STAT);
    // capped * 100 / 255 is at most 100.
    (capped * 100 / MAX_STAT) as u8
}

pub fn stat_grade(value: u32) -> StatGrade {
    match value {
        150.. => StatGrade::Excellent,
        90..=149 => StatGrade::Good,
        60..=89 => StatGrade::Fair,
        _ => StatGrade::Low,
    }
}

pub fn ability_label(name: &str) -> String {
    name.replace('-', " ")
}
