//! Crafting Catalog App
//!
//! Loads the bundled catalog, provides shared context and theme, and lays
//! out the header above the catalog browser.

use leptos::prelude::*;
use reactive_stores::Store;

use catalog_core::Catalog;

use crate::components::{CatalogBrowser, Header};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::data::load_bundled_catalog;
use crate::store::BrowserState;
use crate::theme::provide_theme;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (catalog, load_error) = match load_bundled_catalog() {
        Ok(catalog) => (catalog, None),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load bundled catalog");
            (Catalog::empty(), Some(err.to_string()))
        }
    };

    provide_theme(config.theme_storage_key.clone());

    // Browser state is scoped to this view instance
    provide_context(Store::new(BrowserState::new(config.default_view_mode)));
    let ctx = AppContext::new(catalog, config, load_error);
    provide_context(ctx);

    view! {
        <div class="app">
            <Header />
            {move || ctx.load_error.get_value().map(|message| view! {
                <div class="load-error" role="alert">
                    {format!("Could not load the item catalog: {message}")}
                </div>
            })}
            <CatalogBrowser />
        </div>
    }
}
