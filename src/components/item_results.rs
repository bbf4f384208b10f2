//! Item Results Component
//!
//! Renders the visible items as a card grid or a row list.

use leptos::prelude::*;

use catalog_core::ItemId;

use crate::components::{ItemCard, ItemRow};
use crate::context::use_app_context;
use crate::models::ViewMode;
use crate::store::{use_browser_store, BrowserStateStoreFields};

#[component]
pub fn ItemResults(visible: Memo<Vec<ItemId>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browser_store();

    let has_results = move || visible.with(|ids| !ids.is_empty());

    view! {
        <Show
            when=has_results
            fallback=|| view! { <p class="no-results">"No items found matching your criteria."</p> }
        >
            {move || match store.view_mode().get() {
                ViewMode::Grid => view! {
                    <div class="items-grid">
                        <For
                            each=move || visible.get()
                            key=|id| *id
                            children=move |id| ctx.item(id).map(|item| view! { <ItemCard item=item /> })
                        />
                    </div>
                }.into_any(),
                ViewMode::List => view! {
                    <ul class="items-list">
                        <For
                            each=move || visible.get()
                            key=|id| *id
                            children=move |id| ctx.item(id).map(|item| view! { <ItemRow item=item /> })
                        />
                    </ul>
                }.into_any(),
            }}
        </Show>
    }
}
