//! Crafting Catalog Core
//!
//! Layered like this:
//! - domain: item records, rarities, skills and validation errors
//! - catalog: the immutable item table loaded from the bundled JSON
//! - selection: multi-select filter sets with an exclusive "Any"
//! - filter: the per-view filter state and the filter pass itself

mod catalog;
mod domain;
mod filter;
mod selection;


pub use catalog::{Catalog, LoadMode, RejectedRecord};
pub use domain::{
    CatalogError, CatalogResult, Entity, Item, ItemId, ItemStack, LevelRequirement, Rarity, Recipe,
    RecordError, SkillId, Tier, ANY_SKILL, SKILLS,
};
pub use filter::{filter_items, reconcile_selection, FilterState};
pub use selection::{toggle_filter, Choice, Selection, ValueSet};
