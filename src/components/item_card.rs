//! Item Card Component
//!
//! Grid tile: icon and name, bordered in the rarity colour.

use leptos::prelude::*;

use catalog_core::Item;

use crate::context::use_app_context;
use crate::store::{use_browser_store, BrowserStateStoreFields};

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browser_store();

    let id = item.id;
    let is_selected = move || store.selected().get() == Some(id);
    let card_class = move || if is_selected() { "item-card selected" } else { "item-card" };
    let icon = item.icon.as_deref().map(|icon| ctx.icon_url(icon));
    let name = item.name;

    view! {
        <div
            class=card_class
            style=format!("border-color: {}", item.rarity.color_var())
            on:click=move |_| store.selected().set(Some(id))
        >
            {icon.map(|src| view! { <img src=src alt=name.clone() class="item-icon" /> })}
            <div class="item-name">{name.clone()}</div>
        </div>
    }
}
