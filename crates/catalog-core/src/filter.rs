//! Filter Engine
//!
//! Computes the visible subset of the catalog for one view's filter state.
//! Every dimension is ANDed; results keep catalog order.

use crate::catalog::Catalog;
use crate::domain::{Entity, Item, Rarity, SkillId, Tier};
use crate::selection::Selection;

/// Per-view filter inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Case-insensitive substring of the item name; empty matches all
    pub search: String,
    pub tiers: Selection<Tier>,
    pub rarities: Selection<Rarity>,
    /// Matches when any recipe is gated on a selected skill
    pub skills: Selection<SkillId>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_tiers(mut self, tiers: Selection<Tier>) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn with_rarities(mut self, rarities: Selection<Rarity>) -> Self {
        self.rarities = rarities;
        self
    }

    pub fn with_skills(mut self, skills: Selection<SkillId>) -> Self {
        self.skills = skills;
        self
    }

    /// True when no dimension restricts anything
    pub fn is_unrestricted(&self) -> bool {
        self.search.is_empty() && self.tiers.is_any() && self.rarities.is_any() && self.skills.is_any()
    }

    /// Full predicate for a single item
    pub fn matches(&self, item: &Item) -> bool {
        CompiledFilter::new(self).matches(item)
    }
}

/// Filter state with the search needle folded once per pass
struct CompiledFilter<'f> {
    state: &'f FilterState,
    needle: Option<String>,
}

impl<'f> CompiledFilter<'f> {
    fn new(state: &'f FilterState) -> Self {
        let needle = (!state.search.is_empty()).then(|| state.search.to_lowercase());
        Self { state, needle }
    }

    fn matches_search(&self, item: &Item) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => item.name.to_lowercase().contains(needle.as_str()),
        }
    }

    fn matches_skill(&self, item: &Item) -> bool {
        match &self.state.skills {
            Selection::Any => true,
            Selection::Only(skills) => skills.iter().any(|&skill| item.requires_skill(skill)),
        }
    }

    fn matches(&self, item: &Item) -> bool {
        self.matches_search(item)
            && self.state.tiers.admits(&item.tier)
            && self.state.rarities.admits(&item.rarity)
            && self.matches_skill(item)
    }
}

/// Items passing every active predicate, in catalog order
pub fn filter_items<'a>(catalog: &'a Catalog, filters: &FilterState) -> Vec<&'a Item> {
    let compiled = CompiledFilter::new(filters);
    let visible: Vec<&Item> = catalog.iter().filter(|item| compiled.matches(item)).collect();
    tracing::trace!(
        total = catalog.len(),
        visible = visible.len(),
        search = %filters.search,
        "Filter pass"
    );
    visible
}

/// Keep `selected` only while it is still visible
pub fn reconcile_selection<E: Entity>(selected: Option<E::Id>, visible: &[&E]) -> Option<E::Id> {
    selected.filter(|id| visible.iter().any(|entity| entity.id() == *id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, LevelRequirement, Recipe};
    use std::collections::BTreeMap;

    fn recipe(skill: u32) -> Recipe {
        Recipe {
            level_requirements: Some(LevelRequirement {
                skill_id: Some(SkillId(skill)),
                level: 1,
            }),
            consumed_items: Vec::new(),
            output_quantity: 1,
            possibilities: BTreeMap::new(),
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let item = Item::new(1, "Iron Ore", 1, Rarity::Common);
        assert!(FilterState::new().with_search("IRON").matches(&item));
        assert!(FilterState::new().with_search("n o").matches(&item));
        assert!(!FilterState::new().with_search("gold").matches(&item));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let item = Item::new(1, "Anything", 4, Rarity::Epic);
        assert!(FilterState::new().matches(&item));
        assert!(FilterState::new().is_unrestricted());
    }

    #[test]
    fn test_skill_requires_some_recipe() {
        let crafted = Item::new(1, "Plank", 1, Rarity::Common).with_recipes(vec![recipe(3), recipe(2)]);
        let empty = Item::new(2, "Stick", 1, Rarity::Common).with_recipes(Vec::new());
        let bare = Item::new(3, "Stone", 1, Rarity::Common);

        let carpentry = FilterState::new().with_skills(Selection::only([SkillId(3)]));
        assert!(carpentry.matches(&crafted));
        assert!(!carpentry.matches(&empty));
        assert!(!carpentry.matches(&bare));

        let masonry = FilterState::new().with_skills(Selection::only([SkillId(4)]));
        assert!(!masonry.matches(&crafted));
    }

    #[test]
    fn test_recipe_without_skill_never_matches_a_skill() {
        let mut ungated = recipe(3);
        ungated.level_requirements = None;
        let item = Item::new(1, "Rope", 1, Rarity::Common).with_recipes(vec![ungated]);
        let filters = FilterState::new().with_skills(Selection::only([SkillId(3)]));
        assert!(!filters.matches(&item));
    }

    #[test]
    fn test_reconcile_selection() {
        let a = Item::new(1, "A", 1, Rarity::Common);
        let b = Item::new(2, "B", 1, Rarity::Common);
        let visible = vec![&a, &b];

        assert_eq!(reconcile_selection(Some(ItemId(2)), &visible), Some(ItemId(2)));
        assert_eq!(reconcile_selection(Some(ItemId(9)), &visible), None);
        assert_eq!(reconcile_selection::<Item>(None, &visible), None);
    }
}
