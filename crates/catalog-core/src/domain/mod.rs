//! Domain Layer
//!
//! Catalog entities and their load-time validation.
//! No UI or browser dependencies live here.

mod entity;
mod item;
mod rarity;
mod skill;

pub use entity::{CatalogError, CatalogResult, Entity, RecordError};
pub use item::{Item, ItemId, ItemStack, LevelRequirement, Recipe, Tier};
pub(crate) use item::RawItem;
pub use rarity::Rarity;
pub use skill::{SkillId, ANY_SKILL, SKILLS};
