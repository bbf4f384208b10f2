//! Frontend Models
//!
//! View-only types and the text helpers shared by the result and detail views.

use serde::{Deserialize, Serialize};

use catalog_core::{Catalog, ItemStack, LevelRequirement, Rarity, Recipe, Tier, SKILLS};

/// How results are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// View mode switch options
pub const VIEW_MODES: &[(ViewMode, &str)] = &[(ViewMode::Grid, "Grid"), (ViewMode::List, "List")];

/// Tier checkbox options: the configured range plus any positive tier the catalog uses
pub fn tier_options(min: i32, max: i32, catalog: &Catalog) -> Vec<(Tier, String)> {
    let mut tiers: Vec<Tier> = (min..=max).map(Tier).collect();
    tiers.extend(catalog.tiers().into_iter().filter(|tier| tier.0 >= 1));
    tiers.sort();
    tiers.dedup();
    tiers.into_iter().map(|tier| (tier, tier.to_string())).collect()
}

pub fn rarity_options() -> Vec<(Rarity, String)> {
    Rarity::ALL.iter().map(|r| (*r, r.label().to_string())).collect()
}

pub fn skill_options() -> Vec<(catalog_core::SkillId, String)> {
    SKILLS.iter().map(|(id, name)| (*id, name.to_string())).collect()
}

/// "Smithing Lv 10", or "No skill required"
pub fn format_requirement(requirement: Option<&LevelRequirement>) -> String {
    match requirement.and_then(|req| req.skill_id.map(|skill| (skill, req.level))) {
        Some((skill, level)) if level > 0 => format!("{skill} Lv {level}"),
        Some((skill, _)) => skill.to_string(),
        None => "No skill required".to_string(),
    }
}

/// "4 × Iron Ore", resolving the id through the catalog
pub fn format_stack(stack: &ItemStack, catalog: &Catalog) -> String {
    format!("{} × {}", stack.quantity, catalog.display_name(stack.id))
}

/// "2 × 25%"
pub fn format_possibility(quantity: u32, probability: f64) -> String {
    let percent = probability * 100.0;
    if (percent - percent.round()).abs() < 0.05 {
        format!("{quantity} × {percent:.0}%")
    } else {
        format!("{quantity} × {percent:.1}%")
    }
}

/// One-line recipe summary used in the list view tooltip
pub fn recipe_summary(recipe: &Recipe, catalog: &Catalog) -> String {
    let inputs: Vec<String> = recipe.consumed_items.iter().map(|stack| format_stack(stack, catalog)).collect();
    let inputs = if inputs.is_empty() { "nothing".to_string() } else { inputs.join(", ") };
    format!("{} → {}", inputs, recipe.output_quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Item, ItemId, SkillId};
    use std::collections::BTreeMap;

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            Item::new(1, "Iron Ore", 1, Rarity::Common),
            Item::new(2, "Relic", 12, Rarity::Epic),
            Item::new(3, "Bundle", -1, Rarity::Common),
        ])
        .expect("catalog")
    }

    #[test]
    fn test_tier_options_merge_catalog_tiers() {
        let options = tier_options(1, 3, &catalog());
        let tiers: Vec<i32> = options.iter().map(|(tier, _)| tier.0).collect();
        assert_eq!(tiers, vec![1, 2, 3, 12]);
        assert_eq!(options[0].1, "Tier 1");
    }

    #[test]
    fn test_skill_options_cover_named_skills() {
        let options = skill_options();
        assert_eq!(options.len(), 13);
        assert_eq!(options[0], (SkillId(2), "Forestry".to_string()));
    }

    #[test]
    fn test_format_requirement() {
        let req = LevelRequirement { skill_id: Some(SkillId(6)), level: 10 };
        assert_eq!(format_requirement(Some(&req)), "Smithing Lv 10");
        let req = LevelRequirement { skill_id: Some(SkillId(6)), level: 0 };
        assert_eq!(format_requirement(Some(&req)), "Smithing");
        assert_eq!(format_requirement(None), "No skill required");
    }

    #[test]
    fn test_format_stack_resolves_names() {
        let catalog = catalog();
        assert_eq!(format_stack(&ItemStack { id: ItemId(1), quantity: 4 }, &catalog), "4 × Iron Ore");
        assert_eq!(format_stack(&ItemStack { id: ItemId(9), quantity: 1 }, &catalog), "1 × #9");
    }

    #[test]
    fn test_format_possibility() {
        assert_eq!(format_possibility(2, 0.25), "2 × 25%");
        assert_eq!(format_possibility(1, 0.125), "1 × 12.5%");
    }

    #[test]
    fn test_recipe_summary() {
        let recipe = Recipe {
            level_requirements: None,
            consumed_items: vec![ItemStack { id: ItemId(1), quantity: 3 }],
            output_quantity: 2,
            possibilities: BTreeMap::new(),
        };
        assert_eq!(recipe_summary(&recipe, &catalog()), "3 × Iron Ore → 2");
    }
}
