use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::ItemCategory;

/// Name of the appreciating cheese.
pub const AGED_BRIE: &str = "Aged Brie";
/// Name of the concert pass.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Immutable name → category mapping with a separately held default.
///
/// Only an exact name match selects a non-default category; every other
/// name (the empty string included) resolves to the default. The default is
/// not an entry in the map, so resolution cannot depend on entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    entries: BTreeMap<String, ItemCategory>,
    default: ItemCategory,
}

impl CategoryTable {
    /// The built-in mapping: brie, backstage passes, Sulfuras, and
    /// [`ItemCategory::Normal`] for everything else.
    pub fn builtin() -> Self {
        Self {
            entries: BTreeMap::from([
                (AGED_BRIE.to_string(), ItemCategory::AgedBrie),
                (BACKSTAGE_PASS.to_string(), ItemCategory::BackstagePass),
                (SULFURAS.to_string(), ItemCategory::Legendary),
            ]),
            default: ItemCategory::Normal,
        }
    }

    /// Build a table from explicit name → category entries.
    ///
    /// An unusable mapping is rejected here, before any update runs: the
    /// entry set must be non-empty and must not map the same name twice.
    pub fn from_entries(
        default: ItemCategory,
        entries: impl IntoIterator<Item = (String, ItemCategory)>,
    ) -> DomainResult<Self> {
        let mut map = BTreeMap::new();
        for (name, category) in entries {
            if map.contains_key(&name) {
                return Err(DomainError::configuration(format!(
                    "category table maps {name:?} twice"
                )));
            }
            map.insert(name, category);
        }
        if map.is_empty() {
            return Err(DomainError::configuration("category table has no entries"));
        }
        Ok(Self {
            entries: map,
            default,
        })
    }

    /// Resolve the category governing `name`. Total: unknown names resolve
    /// to the default rather than erroring.
    pub fn resolve(&self, name: &str) -> ItemCategory {
        self.entries.get(name).copied().unwrap_or(self.default)
    }

    /// The category applied to names without an exact match.
    pub fn default_category(&self) -> ItemCategory {
        self.default
    }
}
