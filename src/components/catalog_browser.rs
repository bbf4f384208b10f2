//! Catalog Browser Component
//!
//! Filters, results and the details panel for one view. The visible id list
//! is a memo over the store's filter fields, recomputed from scratch on
//! every change.

use leptos::prelude::*;

use catalog_core::{filter_items, reconcile_selection, Item, ItemId};

use crate::components::{FilterPanel, ItemDetails, ItemResults, SearchBar, ViewModeToggle};
use crate::context::use_app_context;
use crate::store::{store_filter_state, use_browser_store, BrowserStateStoreFields};

#[component]
pub fn CatalogBrowser() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browser_store();

    let filters = Memo::new(move |_| store_filter_state(&store));

    let visible = Memo::new(move |_| {
        filters.with(|filters| {
            ctx.catalog.with_value(|catalog| {
                filter_items(catalog, filters)
                    .into_iter()
                    .map(|item| item.id)
                    .collect::<Vec<ItemId>>()
            })
        })
    });

    // Drop the selection once it is filtered out of view
    Effect::new(move |_| {
        let ids = visible.get();
        let selected = store.selected().get_untracked();
        let kept = ctx.catalog.with_value(|catalog| {
            let items: Vec<&Item> = ids.iter().filter_map(|id| catalog.get(*id)).collect();
            reconcile_selection(selected, &items)
        });
        if kept != selected {
            tracing::debug!(?selected, "Selected item filtered out of view");
            store.selected().set(kept);
        }
    });

    let total = ctx.total();

    view! {
        <div class="display-content">
            <FilterPanel />
            <section class="results-column">
                <div class="results-toolbar">
                    <SearchBar />
                    <ViewModeToggle />
                    <span class="item-count">
                        {move || format!("{} of {} items", visible.with(Vec::len), total)}
                    </span>
                </div>
                <ItemResults visible=visible />
            </section>
            <ItemDetails />
        </div>
    }
}
