//! Item Row Component
//!
//! List entry: icon, name, tier, rarity and tag in one line.

use leptos::prelude::*;

use catalog_core::Item;

use crate::context::use_app_context;
use crate::models::recipe_summary;
use crate::store::{use_browser_store, BrowserStateStoreFields};

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browser_store();

    let id = item.id;
    let is_selected = move || store.selected().get() == Some(id);
    let row_class = move || if is_selected() { "item-row selected" } else { "item-row" };
    let icon = item.icon.as_deref().map(|icon| ctx.icon_url(icon));
    let tooltip = item
        .recipes()
        .first()
        .map(|recipe| ctx.catalog.with_value(|catalog| recipe_summary(recipe, catalog)))
        .unwrap_or_default();

    view! {
        <li class=row_class title=tooltip on:click=move |_| store.selected().set(Some(id))>
            {icon.map(|src| view! { <img src=src alt="" class="item-icon small" /> })}
            <span class="item-name">{item.name.clone()}</span>
            <span class="item-tier">{item.tier.to_string()}</span>
            <span class="item-rarity" style=format!("color: {}", item.rarity.color_var())>
                {item.rarity.label()}
            </span>
            <span class="item-tag">{item.tag.clone().unwrap_or_default()}</span>
        </li>
    }
}
