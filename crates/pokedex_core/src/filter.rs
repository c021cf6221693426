use crate::Entity;

/// Type tags offered by the type selector, in display order.
pub const KNOWN_TYPES: [&str; 18] = [
    "fire", "water", "grass", "electric", "psychic", "ice", "dragon", "dark", "fairy", "normal",
    "fighting", "flying", "poison", "ground", "rock", "bug", "ghost", "steel",
];

pub fn is_known_type(tag: &str) -> bool {
    KNOWN_TYPES.contains(&tag)
}

/// Search term and type selector narrowing a displayed list. Empty means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub type_tag: String,
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            type_tag: type_tag.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.type_tag.is_empty()
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        let matches_search = self.search.is_empty()
            || entity
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_type = self.type_tag.is_empty() || entity.has_type(&self.type_tag);
        matches_search && matches_type
    }
}

/// Keep entities matching `criteria`, preserving input order.
pub fn filter_entities<'a>(entities: &'a [Entity], criteria: &FilterCriteria) -> Vec<&'a Entity> {
    entities
        .iter()
        .filter(|entity| criteria.matches(entity))
        .collect()
}
