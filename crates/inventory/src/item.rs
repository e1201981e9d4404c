use serde::{Deserialize, Serialize};

/// One inventory line.
///
/// `name` selects which category rule governs the item and is immutable
/// after construction. `sell_in` counts the days remaining before the
/// sell-by date; it may go negative (the date has passed) and has no lower
/// bound. `quality` is kept within `[0, 50]` by the category rules for
/// ordinary items; legendary items are exempt and keep whatever value they
/// were constructed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub(crate) name: String,
    pub(crate) sell_in: i32,
    pub(crate) quality: i32,
}

impl Item {
    /// Create an item. Any initial values are accepted; quality bounds are
    /// a property of the daily rules, not of the item itself.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// True once the sell-by date has passed.
    pub fn expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_accepts_any_values() {
        let item = Item::new("Foo", -3, 80);
        assert_eq!(item.name(), "Foo");
        assert_eq!(item.sell_in(), -3);
        assert_eq!(item.quality(), 80);
        assert!(item.expired());
    }

    #[test]
    fn display_renders_report_line() {
        let item = Item::new("Aged Brie", 2, 0);
        assert_eq!(item.to_string(), "Aged Brie, 2, 0");
    }

    #[test]
    fn deserializes_from_json_object() {
        let json = r#"{"name":"Elixir of the Mongoose","sell_in":5,"quality":7}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item, Item::new("Elixir of the Mongoose", 5, 7));
    }
}
