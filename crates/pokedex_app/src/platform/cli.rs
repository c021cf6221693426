use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use pokedex_core::{is_known_type, KNOWN_TYPES};

use super::logging::LogDestination;

/// Pokédex Lite: browse the PokeAPI catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pokedex", version)]
pub struct Cli {
    /// Directory holding favourites, theme and config.ron.
    #[arg(long, default_value = ".pokedex")]
    pub data_dir: PathBuf,

    /// Catalog API base url; overrides config.ron.
    #[arg(long)]
    pub api_base: Option<String>,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log debug output.
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive browser (default).
    Browse,
    /// Print one listing page.
    Page {
        page: u32,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Print the details of one entry.
    Show { id: u32 },
    /// Add or remove a favourite.
    Fav { id: u32 },
    /// Print the favourites page.
    Favs {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Switch between light and dark theme.
    Theme,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct FilterArgs {
    /// Case-insensitive name search.
    #[arg(long)]
    pub search: Option<String>,
    /// Only entries with this type (fire, water, grass, ...).
    #[arg(long = "type", value_parser = parse_type_tag)]
    pub type_tag: Option<String>,
}

fn parse_type_tag(raw: &str) -> Result<String, String> {
    let tag = raw.trim().to_lowercase();
    if is_known_type(&tag) {
        Ok(tag)
    } else {
        Err(format!(
            "unknown type {raw:?}; expected one of: {}",
            KNOWN_TYPES.join(", ")
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
    Off,
}

impl Cli {
    /// Log destination, or `None` when logging is off.
    pub fn log_destination(&self) -> Option<LogDestination> {
        match self.log {
            LogTarget::File => Some(LogDestination::File),
            LogTarget::Terminal => Some(LogDestination::Terminal),
            LogTarget::Both => Some(LogDestination::Both),
            LogTarget::Off => None,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_browse_with_file_logging() {
        let cli = Cli::try_parse_from(["pokedex"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, PathBuf::from(".pokedex"));
        assert_eq!(cli.log_destination(), Some(LogDestination::File));
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn page_accepts_filters() {
        let cli =
            Cli::try_parse_from(["pokedex", "page", "3", "--search", "char", "--type", "fire"])
                .unwrap();
        match cli.command {
            Some(Command::Page { page, filter }) => {
                assert_eq!(page, 3);
                assert_eq!(filter.search.as_deref(), Some("char"));
                assert_eq!(filter.type_tag.as_deref(), Some("fire"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn type_filter_is_normalised() {
        let cli = Cli::try_parse_from(["pokedex", "favs", "--type", " Fire "]).unwrap();
        match cli.command {
            Some(Command::Favs { filter }) => assert_eq!(filter.type_tag.as_deref(), Some("fire")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_type_filter_is_rejected() {
        let err = Cli::try_parse_from(["pokedex", "favs", "--type", "firee"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unknown type \"firee\""));

        assert!(Cli::try_parse_from(["pokedex", "page", "1", "--type", ""]).is_err());
    }

    #[test]
    fn log_can_be_disabled() {
        let cli = Cli::try_parse_from(["pokedex", "--log", "off", "theme"]).unwrap();
        assert_eq!(cli.log_destination(), None);
        assert!(matches!(cli.command, Some(Command::Theme)));
    }
}
