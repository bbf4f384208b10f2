//! Application Context
//!
//! Read-only state shared by every component: the item table and config.

use leptos::prelude::*;

use catalog_core::{Catalog, Item, ItemId, Tier};

use crate::config::AppConfig;
use crate::models::tier_options;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Validated item table, immutable after start
    pub catalog: StoredValue<Catalog>,
    pub config: StoredValue<AppConfig>,
    /// Dataset load failure shown as a banner
    pub load_error: StoredValue<Option<String>>,
}

impl AppContext {
    pub fn new(catalog: Catalog, config: AppConfig, load_error: Option<String>) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            config: StoredValue::new(config),
            load_error: StoredValue::new(load_error),
        }
    }

    /// Clone one item out of the table
    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.catalog.with_value(|catalog| catalog.get(id).cloned())
    }

    pub fn total(&self) -> usize {
        self.catalog.with_value(Catalog::len)
    }

    pub fn icon_url(&self, icon: &str) -> String {
        self.config.with_value(|config| config.icon_url(icon))
    }

    pub fn tier_options(&self) -> Vec<(Tier, String)> {
        let (min, max) = self.config.with_value(|config| (config.min_tier, config.max_tier));
        self.catalog.with_value(|catalog| tier_options(min, max, catalog))
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
