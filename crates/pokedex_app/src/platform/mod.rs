mod app;
mod cli;
mod effects;
mod input;
mod logging;
mod persistence;
mod ui;

pub use app::run_app;
