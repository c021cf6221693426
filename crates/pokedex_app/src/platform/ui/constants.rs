use pokedex_core::Theme;

pub const TITLE: &str = "Pokédex Lite";
pub const NO_IMAGE: &str = "No image";
pub const GRID_COLUMNS: usize = 4;
pub const CARD_WIDTH: usize = 22;
pub const STAT_BAR_WIDTH: usize = 20;
pub const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

/// ANSI escape codes for one theme.
#[derive(Debug)]
pub struct Palette {
    pub title: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub star: &'static str,
    pub error: &'static str,
    pub reset: &'static str,
}

const LIGHT: Palette = Palette {
    title: "\u{1b}[1;31m",
    accent: "\u{1b}[34m",
    muted: "\u{1b}[90m",
    star: "\u{1b}[33m",
    error: "\u{1b}[31m",
    reset: "\u{1b}[0m",
};

const DARK: Palette = Palette {
    title: "\u{1b}[1;91m",
    accent: "\u{1b}[96m",
    muted: "\u{1b}[37m",
    star: "\u{1b}[93m",
    error: "\u{1b}[91m",
    reset: "\u{1b}[0m",
};

const PLAIN: Palette = Palette {
    title: "",
    accent: "",
    muted: "",
    star: "",
    error: "",
    reset: "",
};

pub fn palette(theme: Theme, color: bool) -> &'static Palette {
    match (color, theme) {
        (false, _) => &PLAIN,
        (true, Theme::Light) => &LIGHT,
        (true, Theme::Dark) => &DARK,
    }
}

/// Foreground colour for a type badge.
pub fn type_color(tag: &str) -> &'static str {
    match tag {
        "fire" | "fighting" => "\u{1b}[31m",
        "water" | "ice" => "\u{1b}[34m",
        "grass" | "bug" => "\u{1b}[32m",
        "electric" | "ground" | "rock" => "\u{1b}[33m",
        "poison" | "ghost" => "\u{1b}[35m",
        "psychic" | "fairy" => "\u{1b}[95m",
        "flying" | "dragon" => "\u{1b}[94m",
        "dark" | "steel" | "normal" => "\u{1b}[37m",
        _ => "\u{1b}[90m",
    }
}
