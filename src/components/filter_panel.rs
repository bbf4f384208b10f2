//! Filter Panel Component
//!
//! Tier, rarity and skill checkbox groups bound to the browser store.

use leptos::prelude::*;

use catalog_core::{Choice, Rarity, SkillId, Tier};

use crate::components::FilterGroup;
use crate::context::use_app_context;
use crate::models::{rarity_options, skill_options};
use crate::store::{
    store_toggle_rarity, store_toggle_skill, store_toggle_tier, use_browser_store,
    BrowserStateStoreFields,
};

#[component]
pub fn FilterPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browser_store();

    view! {
        <aside class="filters-content">
            <h2>"Filters"</h2>
            <FilterGroup
                title="Tier"
                options=ctx.tier_options()
                selection=Signal::derive(move || store.tiers().get())
                on_toggle={move |choice: Choice<Tier>| store_toggle_tier(&store, choice)}
            />
            <FilterGroup
                title="Rarity"
                options=rarity_options()
                selection=Signal::derive(move || store.rarities().get())
                on_toggle={move |choice: Choice<Rarity>| store_toggle_rarity(&store, choice)}
            />
            <FilterGroup
                title="Skill"
                options=skill_options()
                selection=Signal::derive(move || store.skills().get())
                on_toggle={move |choice: Choice<SkillId>| store_toggle_skill(&store, choice)}
            />
        </aside>
    }
}
