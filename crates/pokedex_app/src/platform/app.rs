use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::{bail, Context};
use clap::Parser;
use pokedex_core::{update, AppState, EntityId, LoadState, Msg, Theme};
use pokedex_logging::{pokedex_debug, pokedex_info};

use super::cli::{Cli, Command, FilterArgs};
use super::effects::EffectRunner;
use super::input::{parse_line, Input, HELP};
use super::logging;
use super::persistence::{load_config, load_preferences, open_store};
use super::ui::constants::CLEAR_SCREEN;
use super::ui::render::Renderer;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(destination) = cli.log_destination() {
        logging::initialize(destination, cli.log_level());
    }
    pokedex_info!("Starting pokedex, data dir {:?}", cli.data_dir);

    let config = load_config(&cli.data_dir);
    let store = open_store(&cli.data_dir);
    let (favorites, theme) = load_preferences(store.as_ref());

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(
        config.fetch_settings(cli.api_base.as_deref()),
        store,
        input_tx.clone(),
    )
    .context("failed to start the fetch engine")?;

    let mut session = Session {
        state: AppState::new().with_view_mode(config.view_mode),
        runner,
        inbox: input_rx,
        renderer: Renderer::new(io::stdout().is_terminal()),
    };
    session.dispatch(Msg::RestorePreferences { favorites, theme });

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => session.browse(input_tx),
        Command::Page { page, filter } => {
            print!("{}", session.page_output(page, &filter)?);
            Ok(())
        }
        Command::Show { id } => {
            print!("{}", session.detail_output(id)?);
            Ok(())
        }
        Command::Favs { filter } => {
            print!("{}", session.favourites_output(&filter)?);
            Ok(())
        }
        Command::Fav { id } => {
            session.dispatch(Msg::ToggleFavorite(id));
            print_favourite_change(id, session.state.favorites().contains(id));
            Ok(())
        }
        Command::Theme => {
            session.dispatch(Msg::ThemeToggled);
            println!("Theme is now {}", theme_name(session.state.theme()));
            Ok(())
        }
    }
}

struct Session {
    state: AppState,
    runner: EffectRunner,
    inbox: mpsc::Receiver<Input>,
    renderer: Renderer,
}

impl Session {
    /// Runs one message through `update` and its effects. Returns whether a redraw is due.
    fn dispatch(&mut self, msg: Msg) -> bool {
        pokedex_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
        self.state.consume_dirty()
    }

    fn browse(&mut self, input_tx: mpsc::Sender<Input>) -> anyhow::Result<()> {
        spawn_stdin_reader(input_tx);
        self.dispatch(Msg::NavigateHome);
        self.redraw()?;

        while let Ok(input) = self.inbox.recv() {
            let redraw = match input {
                Input::Msg(msg) => self.dispatch(msg),
                Input::Help => {
                    println!("{HELP}");
                    false
                }
                Input::Unknown(line) => {
                    println!("Unknown command: {line} (type 'help')");
                    false
                }
                Input::Quit => break,
            };
            if redraw {
                self.redraw()?;
            }
        }
        pokedex_info!("Leaving browser");
        Ok(())
    }

    fn redraw(&self) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{CLEAR_SCREEN}")?;
        write!(out, "{}", self.renderer.render(&self.state.view()))?;
        write!(out, "\n> ")?;
        out.flush()?;
        Ok(())
    }

    /// Delivers engine completions until no load is outstanding.
    fn settle(&mut self) -> anyhow::Result<()> {
        while self.state.is_loading() {
            match self.inbox.recv() {
                Ok(Input::Msg(msg)) => {
                    self.dispatch(msg);
                }
                Ok(_) => {}
                Err(_) => bail!("fetch engine stopped before the request completed"),
            }
        }
        Ok(())
    }

    fn apply_filter(&mut self, filter: &FilterArgs) {
        if let Some(search) = &filter.search {
            self.dispatch(Msg::SearchChanged(search.clone()));
        }
        if let Some(type_tag) = &filter.type_tag {
            self.dispatch(Msg::TypeSelected(type_tag.clone()));
        }
    }

    fn page_output(&mut self, page: u32, filter: &FilterArgs) -> anyhow::Result<String> {
        self.apply_filter(filter);
        // The first page supplies the page count needed to validate `page`.
        self.dispatch(Msg::NavigateHome);
        self.settle()?;
        if page != self.state.page() {
            if let LoadState::Loaded(_) = self.state.listing() {
                let total = self.state.total_pages();
                if page == 0 || page > total {
                    bail!("page {page} is out of range (1-{total})");
                }
            }
            self.dispatch(Msg::PageRequested(page));
            self.settle()?;
        }
        Ok(self.renderer.render(&self.state.view()))
    }

    fn detail_output(&mut self, id: EntityId) -> anyhow::Result<String> {
        self.dispatch(Msg::DetailRequested(id));
        self.settle()?;
        let view = self.state.view();
        Ok(view
            .modal
            .as_ref()
            .map(|modal| self.renderer.modal(modal, view.theme))
            .unwrap_or_default())
    }

    fn favourites_output(&mut self, filter: &FilterArgs) -> anyhow::Result<String> {
        self.apply_filter(filter);
        self.dispatch(Msg::NavigateFavourites);
        self.settle()?;
        Ok(self.renderer.render(&self.state.view()))
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let input = parse_line(&line);
            let quit = input == Input::Quit;
            if input_tx.send(input).is_err() || quit {
                return;
            }
        }
        let _ = input_tx.send(Input::Quit);
    });
}

fn print_favourite_change(id: EntityId, is_favorite: bool) {
    if is_favorite {
        println!("Added #{id:03} to favourites");
    } else {
        println!("Removed #{id:03} from favourites");
    }
}

fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}
