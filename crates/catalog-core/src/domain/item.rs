//! Item Entity
//!
//! A crafting catalog entry: display data plus the recipes that produce it.
//! Records arrive as loosely-typed JSON and are validated into [`Item`] once,
//! at load time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::entity::{Entity, RecordError};
use super::rarity::Rarity;
use super::skill::SkillId;

/// Unique item key. Cargo entries sit above `u32::MAX` in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

/// Progression bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Tier(pub i32);

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.0)
    }
}

/// Skill gate on a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LevelRequirement {
    #[serde(default)]
    pub skill_id: Option<SkillId>,
    #[serde(default)]
    pub level: u32,
}

/// A quantity of some item consumed by a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ItemStack {
    pub id: ItemId,
    pub quantity: u32,
}

fn default_output_quantity() -> u32 {
    1
}

/// A crafting formula producing the owning item
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub level_requirements: Option<LevelRequirement>,
    #[serde(default)]
    pub consumed_items: Vec<ItemStack>,
    #[serde(default = "default_output_quantity")]
    pub output_quantity: u32,
    /// Output quantity -> probability, for randomized outputs
    #[serde(default)]
    pub possibilities: BTreeMap<u32, f64>,
}

impl Recipe {
    /// Skill required to craft, if any
    pub fn skill(&self) -> Option<SkillId> {
        self.level_requirements.and_then(|req| req.skill_id)
    }
}

/// A validated catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display name
    pub name: String,
    pub tier: Tier,
    pub rarity: Rarity,
    /// Category string
    pub tag: Option<String>,
    /// Asset reference, resolved by the view
    pub icon: Option<String>,
    /// `None` when the record carries no recipe list at all
    pub recipes: Option<Vec<Recipe>>,
    /// Skill used to gather this item, when it is gathered rather than crafted
    pub extraction_skill: Option<SkillId>,
}

impl Item {
    /// Create an item with only the required fields set
    pub fn new(id: u64, name: impl Into<String>, tier: i32, rarity: Rarity) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            tier: Tier(tier),
            rarity,
            tag: None,
            icon: None,
            recipes: None,
            extraction_skill: None,
        }
    }

    /// Recipes as a slice; absent and empty are the same here
    pub fn recipes(&self) -> &[Recipe] {
        self.recipes.as_deref().unwrap_or(&[])
    }

    /// True if at least one recipe is gated on `skill`
    pub fn requires_skill(&self, skill: SkillId) -> bool {
        self.recipes().iter().any(|recipe| recipe.skill() == Some(skill))
    }

    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = Some(recipes);
        self
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Record shape as found in the dataset; every field is suspect
#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    name: Option<String>,
    tier: Option<i64>,
    rarity: Option<i64>,
    tag: Option<String>,
    icon: Option<String>,
    recipes: Option<Vec<Recipe>>,
    extraction_skill: Option<i64>,
}

impl RawItem {
    /// Validate into an [`Item`]
    pub(crate) fn validate(self, id: ItemId) -> Result<Item, RecordError> {
        let name = self.name.ok_or(RecordError::MissingField("name"))?;
        if name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }

        let tier = self.tier.ok_or(RecordError::MissingField("tier"))?;
        let tier = i32::try_from(tier).map_err(|_| RecordError::TierOutOfRange(tier))?;

        let rarity = self.rarity.ok_or(RecordError::MissingField("rarity"))?;
        let rarity = Rarity::try_from(rarity)?;

        // Negative means "not extractable" in the source data
        let extraction_skill = self
            .extraction_skill
            .and_then(|skill| u32::try_from(skill).ok())
            .map(SkillId);

        Ok(Item {
            id,
            name,
            tier: Tier(tier),
            rarity,
            tag: self.tag,
            icon: self.icon,
            recipes: self.recipes,
            extraction_skill,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawItem {
        serde_json::from_value(value).expect("raw item")
    }

    #[test]
    fn test_item_creation() {
        let item = Item::new(1, "Iron Ore", 1, Rarity::Common);
        assert_eq!(item.id(), ItemId(1));
        assert_eq!(item.name, "Iron Ore");
        assert!(item.recipes().is_empty());
    }

    #[test]
    fn test_validate_full_record() {
        let item = raw(json!({
            "name": "Plank",
            "tier": 2,
            "rarity": 1,
            "tag": "Plank",
            "icon": "Items/Plank",
            "extraction_skill": -1,
            "recipes": [{
                "level_requirements": { "skill_id": 3, "level": 5 },
                "consumed_items": [{ "id": 10, "quantity": 2 }],
                "output_quantity": 1,
                "possibilities": {}
            }]
        }))
        .validate(ItemId(42))
        .expect("valid");

        assert_eq!(item.tier, Tier(2));
        assert_eq!(item.extraction_skill, None);
        assert!(item.requires_skill(SkillId(3)));
        assert!(!item.requires_skill(SkillId(4)));
        assert_eq!(item.recipes()[0].consumed_items[0].quantity, 2);
    }

    #[test]
    fn test_validate_possibilities_keys() {
        let item = raw(json!({
            "name": "Fish Filet",
            "tier": 1,
            "rarity": 1,
            "recipes": [{ "possibilities": { "1": 0.75, "2": 0.25 } }]
        }))
        .validate(ItemId(1))
        .expect("valid");

        let recipe = &item.recipes()[0];
        assert_eq!(recipe.output_quantity, 1);
        assert_eq!(recipe.possibilities.get(&2), Some(&0.25));
        assert_eq!(recipe.skill(), None);
    }

    #[test]
    fn test_validate_missing_name() {
        let err = raw(json!({ "tier": 1, "rarity": 1 }))
            .validate(ItemId(1))
            .unwrap_err();
        assert_eq!(err, RecordError::MissingField("name"));
    }

    #[test]
    fn test_validate_blank_name() {
        let err = raw(json!({ "name": "  ", "tier": 1, "rarity": 1 }))
            .validate(ItemId(1))
            .unwrap_err();
        assert_eq!(err, RecordError::EmptyName);
    }

    #[test]
    fn test_validate_bad_rarity() {
        let err = raw(json!({ "name": "X", "tier": 1, "rarity": 9 }))
            .validate(ItemId(1))
            .unwrap_err();
        assert_eq!(err, RecordError::RarityOutOfRange(9));
    }

    #[test]
    fn test_absent_recipes_stay_absent() {
        let item = raw(json!({ "name": "X", "tier": 1, "rarity": 2 }))
            .validate(ItemId(1))
            .expect("valid");
        assert!(item.recipes.is_none());
        assert!(!item.requires_skill(SkillId(2)));
    }
}
