//! Item Details Component
//!
//! Side panel for the selected item: classification, extraction skill and
//! every recipe with its inputs, skill gate and output chances.

use leptos::prelude::*;

use catalog_core::{Catalog, Item, Recipe};

use crate::context::use_app_context;
use crate::models::{format_possibility, format_requirement, format_stack};
use crate::store::{use_browser_store, BrowserStateStoreFields};

#[component]
pub fn ItemDetails() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browser_store();

    let selected_item = move || store.selected().get().and_then(|id| ctx.item(id));

    view! {
        <aside class="selected-item-details">
            {move || match selected_item() {
                Some(item) => {
                    let recipes = ctx.catalog.with_value(|catalog| render_recipes(&item, catalog));
                    view! {
                        <h3 style=format!("color: {}", item.rarity.color_var())>{item.name.clone()}</h3>
                        <dl class="item-facts">
                            <dt>"Tier"</dt><dd>{item.tier.0}</dd>
                            <dt>"Rarity"</dt><dd>{item.rarity.label()}</dd>
                            <dt>"Category"</dt><dd>{item.tag.clone().unwrap_or_else(|| "-".to_string())}</dd>
                            <dt>"Gathered with"</dt>
                            <dd>{item.extraction_skill.map(|skill| skill.to_string()).unwrap_or_else(|| "-".to_string())}</dd>
                        </dl>
                        {recipes}
                        <button class="close-details-btn" on:click=move |_| store.selected().set(None)>
                            "Close"
                        </button>
                    }.into_any()
                }
                None => view! { <p class="details-placeholder">"Select an item to see its recipes."</p> }.into_any(),
            }}
        </aside>
    }
}

fn render_recipes(item: &Item, catalog: &Catalog) -> AnyView {
    let recipes = item.recipes();
    if recipes.is_empty() {
        return view! { <p class="no-recipes">"No known recipes."</p> }.into_any();
    }

    view! {
        <ol class="recipe-list">
            {recipes.iter().map(|recipe| render_recipe(recipe, catalog)).collect_view()}
        </ol>
    }
    .into_any()
}

fn render_recipe(recipe: &Recipe, catalog: &Catalog) -> impl IntoView {
    let requirement = format_requirement(recipe.level_requirements.as_ref());
    let inputs: Vec<String> = recipe.consumed_items.iter().map(|stack| format_stack(stack, catalog)).collect();
    let chances: Vec<String> = recipe
        .possibilities
        .iter()
        .map(|(quantity, probability)| format_possibility(*quantity, *probability))
        .collect();

    view! {
        <li class="recipe">
            <div class="recipe-requirement">{requirement}</div>
            <ul class="recipe-inputs">
                {inputs.into_iter().map(|input| view! { <li>{input}</li> }).collect_view()}
            </ul>
            <div class="recipe-output">{format!("Makes {}", recipe.output_quantity)}</div>
            {(!chances.is_empty()).then(|| view! {
                <div class="recipe-chances">{format!("Chances: {}", chances.join(", "))}</div>
            })}
        </li>
    }
}
