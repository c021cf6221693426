use crate::EntityId;

/// Set of favourited ids, kept in insertion order for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Favorites {
    ids: Vec<EntityId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a persisted list, dropping repeated ids but keeping first-seen order.
    pub fn from_ids(ids: impl IntoIterator<Item = EntityId>) -> Self {
        let mut favorites = Self::new();
        for id in ids {
            if !favorites.contains(id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    /// Remove `id` if present, otherwise append it. Returns whether it is now a favourite.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&fav| fav == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
