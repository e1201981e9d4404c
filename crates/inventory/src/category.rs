use serde::{Deserialize, Serialize};

use gildedrose_core::DailyRule;

use crate::item::Item;

/// Lower quality bound for ordinary items.
pub const MIN_QUALITY: i32 = 0;
/// Upper quality bound for ordinary items.
pub const MAX_QUALITY: i32 = 50;

/// Days-left band within which a backstage pass appreciates by 2 per day.
const PASS_DOUBLE_GAIN_WITHIN: i32 = 10;
/// Days-left band within which a backstage pass appreciates by 3 per day.
const PASS_TRIPLE_GAIN_WITHIN: i32 = 5;

/// Item category: decides which daily rule governs an item.
///
/// The set is closed. Names not mapped to a category by the
/// [`CategoryTable`](crate::registry::CategoryTable) fall back to its
/// default, so there is no "unknown" variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Plain stock: loses quality daily, twice as fast once expired.
    Normal,
    /// Appreciates with age, twice as fast once expired.
    AgedBrie,
    /// Appreciates as the concert approaches; worthless the day after it.
    BackstagePass,
    /// Never has to be sold and never changes, quality bounds included.
    Legendary,
}

impl DailyRule for ItemCategory {
    type Subject = Item;

    fn advance_one_day(&self, item: &mut Item) {
        match self {
            ItemCategory::Normal => advance_normal(item),
            ItemCategory::AgedBrie => advance_aged_brie(item),
            ItemCategory::BackstagePass => advance_backstage_pass(item),
            ItemCategory::Legendary => {}
        }
    }
}

fn advance_normal(item: &mut Item) {
    item.sell_in -= 1;
    lower_quality(item);
    if item.expired() {
        lower_quality(item);
    }
}

fn advance_aged_brie(item: &mut Item) {
    item.sell_in -= 1;
    raise_quality(item, 1);
    if item.expired() {
        raise_quality(item, 1);
    }
}

fn advance_backstage_pass(item: &mut Item) {
    // Gain bands read the days left at the start of the day: a pass
    // entering the day with sell_in == 10 already earns the +2 band.
    let days_left = item.sell_in;
    let gain = if days_left <= PASS_TRIPLE_GAIN_WITHIN {
        3
    } else if days_left <= PASS_DOUBLE_GAIN_WITHIN {
        2
    } else {
        1
    };

    item.sell_in -= 1;
    raise_quality(item, gain);

    // The cap applies first; once the concert has passed the pass is
    // worthless regardless of the gain computed above.
    if item.expired() {
        item.quality = 0;
    }
}

fn lower_quality(item: &mut Item) {
    if item.quality > MIN_QUALITY {
        item.quality -= 1;
    }
}

fn raise_quality(item: &mut Item, amount: i32) {
    item.quality = (item.quality + amount).min(MAX_QUALITY);
}
