#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use serde::{Deserialize, Serialize};

/// The fixed set of items the shop page sells.
///
/// The set is closed by design: the sync payload and the per-item cookies
/// are keyed by these names and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Paperclip,
    Monalisa,
    Spaceshuttle,
}

/// All items, in cookie/payload key order.
pub const ITEMS: [Item; 3] = [Item::Paperclip, Item::Monalisa, Item::Spaceshuttle];

/// Error for an item name outside the fixed set.
#[derive(Debug, thiserror::Error)]
#[error("unknown item `{0}`; expected paperclip, monalisa or spaceshuttle")]
pub struct ItemParseError(pub String);

impl Item {
    /// The cookie and JSON key for this item.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Paperclip => "paperclip",
            Self::Monalisa => "monalisa",
            Self::Spaceshuttle => "spaceshuttle",
        }
    }
}

impl std::str::FromStr for Item {
    type Err = ItemParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paperclip" => Ok(Self::Paperclip),
            "monalisa" => Ok(Self::Monalisa),
            "spaceshuttle" => Ok(Self::Spaceshuttle),
            _ => Err(ItemParseError(s.to_owned())),
        }
    }
}

/// Item counts for the current session. Counts are unsigned, so a negative
/// count is unrepresentable; decrements saturate at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub paperclip: u32,
    pub monalisa: u32,
    pub spaceshuttle: u32,
}

impl Cart {
    /// Empty cart, the documented default when no cookies are present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self, item: Item) -> u32 {
        match item {
            Item::Paperclip => self.paperclip,
            Item::Monalisa => self.monalisa,
            Item::Spaceshuttle => self.spaceshuttle,
        }
    }

    fn count_mut(&mut self, item: Item) -> &mut u32 {
        match item {
            Item::Paperclip => &mut self.paperclip,
            Item::Monalisa => &mut self.monalisa,
            Item::Spaceshuttle => &mut self.spaceshuttle,
        }
    }

    /// Clamp an untrusted integer into a count (negative becomes zero).
    #[must_use]
    pub fn clamp_count(value: i64) -> u32 {
        value.clamp(0, i64::from(u32::MAX)) as u32
    }

    pub fn set_count(&mut self, item: Item, value: i64) {
        *self.count_mut(item) = Self::clamp_count(value);
    }

    pub fn add_one(&mut self, item: Item) {
        let slot = self.count_mut(item);
        *slot = slot.saturating_add(1);
    }

    /// Remove one of `item`. At zero this is a no-op, never a negative count.
    pub fn remove_one(&mut self, item: Item) {
        let slot = self.count_mut(item);
        *slot = slot.saturating_sub(1);
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.paperclip + self.monalisa + self.spaceshuttle
    }
}
