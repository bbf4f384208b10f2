//! Domain Layer - Core Entity Trait and Errors
//!
//! Every catalog record has a unique, copyable identifier.
//! Load-time validation failures are reported through [`CatalogError`].

use thiserror::Error;

use super::item::ItemId;

/// Core trait for all catalog entities
pub trait Entity {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while turning the raw dataset into a [`Catalog`](crate::Catalog)
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not JSON, or not a JSON object keyed by item id
    #[error("dataset is not a valid item table: {0}")]
    Parse(#[from] serde_json::Error),

    /// An object key that does not decode to a numeric item id
    #[error("invalid item id {key:?}")]
    InvalidId { key: String },

    /// A record that fails field validation
    #[error("item {id}: {source}")]
    InvalidRecord {
        id: ItemId,
        #[source]
        source: RecordError,
    },

    /// Two keys that decode to the same item id (e.g. "7" and "07")
    #[error("duplicate item id {id}")]
    DuplicateId { id: ItemId },
}

/// Why a single record was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("name is empty")]
    EmptyName,

    #[error("rarity {0} is outside 1..=5")]
    RarityOutOfRange(i64),

    #[error("tier {0} does not fit in an i32")]
    TierOutOfRange(i64),

    #[error("malformed record: {0}")]
    Malformed(String),
}
