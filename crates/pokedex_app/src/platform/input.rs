use pokedex_core::{Msg, NavKey};

/// One line typed at the prompt, or a completion forwarded from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Msg(Msg),
    Help,
    Quit,
    Unknown(String),
}

const ARROW_LEFT: &str = "\u{1b}[D";
const ARROW_RIGHT: &str = "\u{1b}[C";

pub const HELP: &str = "\
Commands:
  n, next, >, Right    next page            p, prev, <, Left   previous page
  page <n>             jump to page         home / favs        switch view
  search [term]        filter by name       type [tag]         filter by type
  open <id>            details of a card    show <id>          details of any id
  close                close details        fav <id>           toggle favourite
  view                 grid / list          theme              light / dark
  retry                retry failed load    help, quit";

pub fn parse_line(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Msg(Msg::NoOp);
    }
    // Raw escape sequences arrive when the terminal is not in line-editing mode.
    if trimmed.ends_with(ARROW_LEFT) {
        return Input::Msg(Msg::KeyPressed(NavKey::Left));
    }
    if trimmed.ends_with(ARROW_RIGHT) {
        return Input::Msg(Msg::KeyPressed(NavKey::Right));
    }

    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    let command = command.to_lowercase();
    let msg = match command.as_str() {
        "q" | "quit" | "exit" => return Input::Quit,
        "?" | "h" | "help" => return Input::Help,
        "n" | "next" | ">" => Msg::KeyPressed(NavKey::Right),
        "p" | "prev" | "<" => Msg::KeyPressed(NavKey::Left),
        "home" => Msg::NavigateHome,
        "favs" | "favourites" | "favorites" => Msg::NavigateFavourites,
        "search" | "s" => Msg::SearchChanged(rest.to_string()),
        "type" | "t" => Msg::TypeSelected(rest.to_string()),
        "close" | "c" => Msg::ModalClosed,
        "view" => Msg::ViewModeToggled,
        "theme" => Msg::ThemeToggled,
        "retry" | "r" => Msg::RetryRequested,
        "page" | "open" | "o" | "show" | "fav" | "f" => match rest.parse::<u32>() {
            Ok(number) => match command.as_str() {
                "page" => Msg::PageRequested(number),
                "open" | "o" => Msg::CardSelected(number),
                "show" => Msg::DetailRequested(number),
                _ => Msg::ToggleFavorite(number),
            },
            Err(_) => return Input::Unknown(trimmed.to_string()),
        },
        _ => return Input::Unknown(trimmed.to_string()),
    };
    Input::Msg(msg)
}
