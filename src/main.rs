//! Crafting Catalog Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod data;
mod logging;
mod models;
mod store;
mod theme;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logging::init_logging(&config.log_config());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting crafting catalog");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
