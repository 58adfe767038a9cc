mod app;
mod binder;
mod config;
mod logging;
mod ui;

pub use app::run_app;
