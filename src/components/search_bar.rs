//! Search Bar Component
//!
//! Name search input plus a button that clears every filter.

use leptos::prelude::*;

use crate::store::{store_clear_filters, use_browser_store, BrowserStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_browser_store();

    view! {
        <div class="search-and-filters">
            <input
                type="text"
                id="search-bar"
                placeholder="Search item..."
                autocomplete="off"
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
            <button
                class="clear-filters-btn"
                on:click=move |_| store_clear_filters(&store)
            >
                "Clear filters"
            </button>
        </div>
    }
}
