//! Browser View State Store
//!
//! Per-view filter and selection state with field-level reactivity
//! (reactive_stores). Each view instance owns its own store.

use leptos::prelude::*;
use reactive_stores::Store;

use catalog_core::{Choice, FilterState, ItemId, Rarity, Selection, SkillId, Tier};

use crate::models::ViewMode;

/// Catalog browser state
#[derive(Clone, Debug, Default, Store)]
pub struct BrowserState {
    /// Name search text
    pub search: String,
    pub tiers: Selection<Tier>,
    pub rarities: Selection<Rarity>,
    pub skills: Selection<SkillId>,
    pub view_mode: ViewMode,
    /// Item shown in the details panel
    pub selected: Option<ItemId>,
}

impl BrowserState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BrowserStore = Store<BrowserState>;

/// Get the browser store from context
pub fn use_browser_store() -> BrowserStore {
    expect_context::<BrowserStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Reactive read of the filter inputs (tracks only the four filter fields)
pub fn store_filter_state(store: &BrowserStore) -> FilterState {
    FilterState {
        search: store.search().get(),
        tiers: store.tiers().get(),
        rarities: store.rarities().get(),
        skills: store.skills().get(),
    }
}

pub fn store_toggle_tier(store: &BrowserStore, choice: Choice<Tier>) {
    store.tiers().update(|tiers| *tiers = tiers.toggled(choice));
}

pub fn store_toggle_rarity(store: &BrowserStore, choice: Choice<Rarity>) {
    store.rarities().update(|rarities| *rarities = rarities.toggled(choice));
}

pub fn store_toggle_skill(store: &BrowserStore, choice: Choice<SkillId>) {
    store.skills().update(|skills| *skills = skills.toggled(choice));
}

/// Reset every filter dimension; view mode and selection are kept
pub fn store_clear_filters(store: &BrowserStore) {
    let FilterState { search, tiers, rarities, skills } = FilterState::default();
    store.search().set(search);
    store.tiers().set(tiers);
    store.rarities().set(rarities);
    store.skills().set(skills);
}
