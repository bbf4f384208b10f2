//! Catalog Table
//!
//! The immutable, validated item table. Built once from the bundled JSON
//! document (an object keyed by decimal item id) and only read afterwards.
//! Document order is preserved; it is the order results are shown in.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{CatalogError, CatalogResult, Item, ItemId, RawItem, RecordError, Tier};

/// How to treat records that fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Fail the whole load on the first bad record
    Strict,
    /// Skip bad records and keep going
    #[default]
    Lenient,
}

/// A record skipped by a lenient load
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Object key as written in the document
    pub key: String,
    pub reason: String,
}

/// Top-level object entries in document order, repeated keys included
struct RecordEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RecordEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RecordEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object keyed by item id")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    entries.push(entry);
                }
                Ok(RecordEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Read-only item table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
    rejected: Vec<RejectedRecord>,
}

impl Catalog {
    /// A catalog with no items
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-typed items, keeping their order
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> CatalogResult<Self> {
        let mut catalog = Self::default();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Parse and validate the JSON item table
    pub fn from_json_str(json: &str, mode: LoadMode) -> CatalogResult<Self> {
        let RecordEntries(entries) = serde_json::from_str(json)?;
        tracing::debug!(records = entries.len(), ?mode, "Validating catalog records");

        let mut catalog = Self::default();
        for (key, value) in entries {
            match Self::decode_record(&key, value).and_then(|item| catalog.insert(item)) {
                Ok(()) => {}
                Err(err) if mode == LoadMode::Lenient => {
                    tracing::warn!(%key, error = %err, "Skipping invalid catalog record");
                    catalog.rejected.push(RejectedRecord {
                        key,
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!(
            items = catalog.items.len(),
            rejected = catalog.rejected.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    fn decode_record(key: &str, value: Value) -> CatalogResult<Item> {
        let id: ItemId = key
            .parse()
            .map_err(|_| CatalogError::InvalidId { key: key.to_string() })?;
        let raw: RawItem = serde_json::from_value(value).map_err(|e| CatalogError::InvalidRecord {
            id,
            source: RecordError::Malformed(e.to_string()),
        })?;
        raw.validate(id)
            .map_err(|source| CatalogError::InvalidRecord { id, source })
    }

    fn insert(&mut self, item: Item) -> CatalogResult<()> {
        if self.index.contains_key(&item.id) {
            return Err(CatalogError::DuplicateId { id: item.id });
        }
        self.index.insert(item.id, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Look up an item by id
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Items in document order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records skipped during a lenient load
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    /// Distinct tiers present in the table, ascending
    pub fn tiers(&self) -> BTreeSet<Tier> {
        self.items.iter().map(|item| item.tier).collect()
    }

    /// Display name for an item id, `#<id>` when unknown
    pub fn display_name(&self, id: ItemId) -> String {
        self.get(id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    }
}
