/// Externally assigned, stable catalog identifier.
pub type EntityId = u32;

/// One catalog entry with everything the detail view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Type tags in slot order.
    pub types: Vec<String>,
    pub stats: Vec<Stat>,
    pub abilities: Vec<String>,
    pub image: Option<String>,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

impl Entity {
    /// `#001` style label; ids above 999 are printed in full.
    pub fn number_label(&self) -> String {
        format!("#{:03}", self.id)
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}

/// One row of a list envelope: a name plus the reference used to fetch details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub url: String,
}

/// Paginated list envelope as returned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<ListEntry>,
}

/// A listing page with every entry's details resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub page: u32,
    pub count: u64,
    pub entities: Vec<Entity>,
}
