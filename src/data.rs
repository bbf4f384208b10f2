//! Bundled Dataset
//!
//! The item table ships inside the binary and is validated once at start.

use catalog_core::{Catalog, CatalogResult, LoadMode};

const BUNDLED_CATALOG: &str = include_str!("../assets/data/crafting_data.json");

/// Load the bundled table, skipping records that fail validation
pub fn load_bundled_catalog() -> CatalogResult<Catalog> {
    let catalog = Catalog::from_json_str(BUNDLED_CATALOG, LoadMode::Lenient)?;
    for rejected in catalog.rejected() {
        tracing::warn!(key = %rejected.key, reason = %rejected.reason, "Bundled record skipped");
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{filter_items, FilterState, ItemId, Selection, SkillId};

    #[test]
    fn test_bundled_catalog_is_clean() {
        let catalog = Catalog::from_json_str(BUNDLED_CATALOG, LoadMode::Strict).expect("strict load");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_bundled_recipe_inputs_resolve() {
        let catalog = load_bundled_catalog().expect("load");
        for item in catalog.iter() {
            for recipe in item.recipes() {
                for stack in &recipe.consumed_items {
                    assert!(catalog.get(stack.id).is_some(), "{} uses unknown {}", item.name, stack.id);
                }
            }
        }
    }

    #[test]
    fn test_bundled_cargo_ids_exceed_u32() {
        let catalog = load_bundled_catalog().expect("load");
        assert!(catalog.get(ItemId(4_294_967_395)).is_some());
    }

    #[test]
    fn test_smithing_filter_on_bundled_data() {
        let catalog = load_bundled_catalog().expect("load");
        let filters = FilterState::new().with_skills(Selection::only([SkillId(6)]));
        let names: Vec<&str> = filter_items(&catalog, &filters).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Ferralith Ingot", "Pyrelite Ingot"]);
    }
}
