use std::fmt::Write;

use pokedex_core::{
    AppViewModel, CardView, ContentView, DetailView, ModalView, PageToken, PaginationView, Route,
    StatGrade, Theme, ViewMode,
};

use super::constants::*;

pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Full screen: navbar, filters, content, pagination, then the modal if one is open.
    pub fn render(&self, view: &AppViewModel) -> String {
        let p = palette(view.theme, self.color);
        let mut out = String::new();

        self.navbar(&mut out, view, p);
        if view.route == Route::Favourites && view.favourites_count > 0 {
            let _ = writeln!(out, "{}Your Favourite Pokémon{}", p.title, p.reset);
            let _ = writeln!(
                out,
                "{}You have {} favourite Pokémon{}",
                p.muted, view.favourites_count, p.reset
            );
        }
        if view.content != ContentView::NoFavourites {
            let search = if view.criteria.search.is_empty() {
                "-"
            } else {
                view.criteria.search.as_str()
            };
            let type_tag = if view.criteria.type_tag.is_empty() {
                "All Types"
            } else {
                view.criteria.type_tag.as_str()
            };
            let _ = writeln!(
                out,
                "{}Search:{} {}   {}Type:{} {}",
                p.muted, p.reset, search, p.muted, p.reset, type_tag
            );
        }
        out.push('\n');

        self.content(&mut out, view, p);

        if let Some(pagination) = &view.pagination {
            out.push('\n');
            out.push_str(&self.pagination(pagination, p));
            out.push('\n');
        }
        if let Some(modal) = &view.modal {
            out.push('\n');
            out.push_str(&self.modal(modal, view.theme));
        }
        out
    }

    fn navbar(&self, out: &mut String, view: &AppViewModel, p: &Palette) {
        let (home, favs) = match view.route {
            Route::Home => ("[Home]", " Favourites "),
            Route::Favourites => (" Home ", "[Favourites]"),
        };
        let mode = match view.view_mode {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        };
        let theme = match view.theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        let _ = writeln!(
            out,
            "{}{}{} {}{}{}  {} {}★{} {} ({})   view: {}  theme: {}",
            p.title,
            TITLE,
            p.reset,
            p.muted,
            view.route.path(),
            p.reset,
            home,
            p.star,
            p.reset,
            favs,
            view.favourites_count,
            mode,
            theme
        );
    }

    fn content(&self, out: &mut String, view: &AppViewModel, p: &Palette) {
        match &view.content {
            ContentView::Loading => self.skeleton(out, view.view_mode, p),
            ContentView::Failed { message } => {
                let _ = writeln!(out, "{}Something went wrong!{}", p.error, p.reset);
                let _ = writeln!(out, "{message}");
                let _ = writeln!(out, "Type 'retry' to try again.");
            }
            ContentView::NoMatches => {
                let _ = writeln!(
                    out,
                    "{}No Pokémon match your search criteria{}",
                    p.muted, p.reset
                );
            }
            ContentView::NoFavourites => {
                let _ = writeln!(out, "{}No Favourite Pokémon Yet{}", p.title, p.reset);
                let _ = writeln!(
                    out,
                    "Start collecting your favourite Pokémon with 'fav <id>' on any card!"
                );
                let _ = writeln!(out, "Type 'home' to explore Pokémon.");
            }
            ContentView::Cards(cards) => match view.view_mode {
                ViewMode::Grid => self.grid(out, cards, p),
                ViewMode::List => self.list(out, cards, p),
            },
        }
    }

    fn skeleton(&self, out: &mut String, mode: ViewMode, p: &Palette) {
        let block = "░".repeat(CARD_WIDTH - 2);
        match mode {
            ViewMode::Grid => {
                for _ in 0..2 {
                    for _ in 0..3 {
                        let row = vec![block.as_str(); GRID_COLUMNS].join("  ");
                        let _ = writeln!(out, "{}{}{}", p.muted, row, p.reset);
                    }
                    out.push('\n');
                }
            }
            ViewMode::List => {
                for _ in 0..4 {
                    let _ = writeln!(out, "{}{}{}", p.muted, block.repeat(3), p.reset);
                }
            }
        }
    }

    fn grid(&self, out: &mut String, cards: &[CardView], p: &Palette) {
        for row in cards.chunks(GRID_COLUMNS) {
            let mut headers = Vec::new();
            let mut names = Vec::new();
            let mut types = Vec::new();
            for card in row {
                let header = format!("{} {}", star(card.is_favorite), card.number_label);
                headers.push(self.cell(&header, p.star, p));
                names.push(self.cell(&capitalize(&card.name), p.accent, p));
                types.push(self.cell(&card.types.join("/"), p.muted, p));
            }
            let _ = writeln!(out, "{}", headers.join(""));
            let _ = writeln!(out, "{}", names.join(""));
            let _ = writeln!(out, "{}", types.join(""));
            out.push('\n');
        }
    }

    fn list(&self, out: &mut String, cards: &[CardView], p: &Palette) {
        for card in cards {
            let types = card
                .types
                .iter()
                .map(|t| self.badge(t, p))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                out,
                "{}{}{} {:<6} {}{:<14}{} {}  {}{}{}",
                p.star,
                star(card.is_favorite),
                p.reset,
                card.number_label,
                p.accent,
                capitalize(&card.name),
                p.reset,
                types,
                p.muted,
                card.image.as_deref().unwrap_or(NO_IMAGE),
                p.reset
            );
        }
    }

    /// Fits plain text to the card width before colouring so escapes do not skew columns.
    fn cell(&self, text: &str, color: &str, p: &Palette) -> String {
        let width = CARD_WIDTH;
        let fitted = truncate(text, CARD_WIDTH - 1);
        format!("{color}{fitted:<width$}{}", p.reset)
    }

    fn badge(&self, tag: &str, p: &Palette) -> String {
        if self.color {
            format!("{}[{}]{}", type_color(tag), tag, p.reset)
        } else {
            format!("[{tag}]")
        }
    }

    pub fn pagination(&self, pagination: &PaginationView, p: &Palette) -> String {
        let mut parts = Vec::new();
        let prev = if pagination.can_prev {
            "« Prev".to_string()
        } else {
            format!("{}« Prev{}", p.muted, p.reset)
        };
        parts.push(prev);
        for token in &pagination.tokens {
            parts.push(match token {
                PageToken::Page(n) if *n == pagination.current => {
                    format!("{}[{}]{}", p.accent, n, p.reset)
                }
                PageToken::Page(n) => n.to_string(),
                PageToken::Ellipsis => "…".to_string(),
            });
        }
        let next = if pagination.can_next {
            "Next »".to_string()
        } else {
            format!("{}Next »{}", p.muted, p.reset)
        };
        parts.push(next);
        parts.join(" ")
    }

    pub fn modal(&self, modal: &ModalView, theme: Theme) -> String {
        let p = palette(theme, self.color);
        let mut out = String::new();
        match modal {
            ModalView::Loading => {
                let _ = writeln!(out, "{}Loading details…{}", p.muted, p.reset);
            }
            ModalView::Failed { message } => {
                let _ = writeln!(out, "{}Something went wrong!{}", p.error, p.reset);
                let _ = writeln!(out, "{message}");
                let _ = writeln!(out, "Type 'retry' to try again or 'close' to dismiss.");
            }
            ModalView::Detail(detail) => self.detail(&mut out, detail, p),
        }
        out
    }

    fn detail(&self, out: &mut String, detail: &DetailView, p: &Palette) {
        let types = detail
            .types
            .iter()
            .map(|t| self.badge(t, p))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            "┌─ {}{}{} {}{}{}  {}  {}{}{}",
            p.muted,
            detail.number_label,
            p.reset,
            p.title,
            capitalize(&detail.name),
            p.reset,
            types,
            p.star,
            star(detail.is_favorite),
            p.reset
        );
        let _ = writeln!(
            out,
            "│ Image: {}",
            detail.image.as_deref().unwrap_or(NO_IMAGE)
        );
        let _ = writeln!(out, "│");
        let _ = writeln!(out, "│ {}Base Stats{}", p.accent, p.reset);
        for stat in &detail.stats {
            let filled = usize::from(stat.percent) * STAT_BAR_WIDTH / 100;
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                "░".repeat(STAT_BAR_WIDTH - filled)
            );
            let _ = writeln!(
                out,
                "│ {:<16} {:>3} {} {}",
                stat.name,
                stat.value,
                bar,
                grade_label(stat.grade)
            );
        }
        let _ = writeln!(out, "│");
        let _ = writeln!(
            out,
            "│ {}Abilities{}: {}",
            p.accent,
            p.reset,
            detail.abilities.join(", ")
        );
        let _ = writeln!(
            out,
            "│ Height: {} m   Weight: {} kg",
            detail.height_m, detail.weight_kg
        );
        let _ = writeln!(out, "└─ 'close' to dismiss, 'fav {}' to toggle", detail.id);
    }
}

fn star(is_favorite: bool) -> &'static str {
    if is_favorite {
        "★"
    } else {
        "☆"
    }
}

fn grade_label(grade: StatGrade) -> &'static str {
    match grade {
        StatGrade::Excellent => "excellent",
        StatGrade::Good => "good",
        StatGrade::Fair => "fair",
        StatGrade::Low => "low",
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
