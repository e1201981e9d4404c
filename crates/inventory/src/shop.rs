use gildedrose_core::DailyRule;

use crate::item::Item;
use crate::registry::CategoryTable;

/// Inventory controller: owns the stock and the category table that decides
/// how each line is updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GildedRose {
    items: Vec<Item>,
    table: CategoryTable,
}

impl GildedRose {
    /// Controller over `items` with the built-in category table.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_table(items, CategoryTable::builtin())
    }

    /// Controller over `items` with a caller-supplied category table
    /// (validated at [`CategoryTable::from_entries`] time).
    pub fn with_table(items: Vec<Item>, table: CategoryTable) -> Self {
        Self { items, table }
    }

    /// Advance every item by one simulated day, in stock order.
    ///
    /// Each item is resolved by name and mutated independently; items never
    /// interact, so the order carries no meaning beyond presentation.
    pub fn advance_day(&mut self) {
        for item in &mut self.items {
            let category = self.table.resolve(&item.name);
            category.advance_one_day(item);
        }
    }

    /// Read access to the stock, in the order it was supplied.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
