//! The preference store: one [`PrefState`] per page load / CLI invocation.
//!
//! DESIGN
//! ======
//! `load` restores state from whatever cookie string the platform persisted,
//! substituting documented defaults for anything missing or malformed (empty
//! cart, mid-gray color). Mutation clamps instead of rejecting. `render` is
//! a pure function of the state — callers own the actual UI side effect, so
//! state transitions stay testable without a UI environment.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::cart::{Cart, ITEMS, Item};
use crate::color::Rgb;
use crate::cookie;

/// Cookie name holding the `#rrggbb` color.
pub const COLOR_COOKIE: &str = "color";

/// The in-memory preference state for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefState {
    pub cart: Cart,
    pub color: Rgb,
}

/// A color channel, addressed by sync-payload key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl PrefState {
    /// Restore state from a persisted cookie string.
    ///
    /// Never fails: each item cookie must be a decimal integer (absent or
    /// unparsable → 0, negative → 0) and the color cookie must be a strict
    /// `#RRGGBB` string (anything else is treated as absent).
    #[must_use]
    pub fn load(cookies: &str) -> Self {
        let mut cart = Cart::new();
        for item in ITEMS {
            if let Some(count) = cookie::get_count(cookies, item.key()) {
                cart.set_count(item, count);
            }
        }
        let color = cookie::get(cookies, COLOR_COOKIE)
            .and_then(Rgb::parse_hex)
            .unwrap_or_default();
        Self { cart, color }
    }

    pub fn add_one(&mut self, item: Item) {
        self.cart.add_one(item);
    }

    pub fn remove_one(&mut self, item: Item) {
        self.cart.remove_one(item);
    }

    /// Set one color channel from untrusted input, clamped to `0..=255`.
    pub fn set_channel(&mut self, channel: Channel, value: i64) {
        let v = Rgb::clamp_channel(value);
        match channel {
            Channel::Red => self.color.red = v,
            Channel::Green => self.color.green = v,
            Channel::Blue => self.color.blue = v,
        }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Render the state as display lines. Pure; the caller writes them out.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = ITEMS
            .iter()
            .map(|item| format!("{:>12}  x{}", item.key(), self.cart.count(*item)))
            .collect();
        lines.push(format!("{:>12}  {}", "color", self.color.to_hex()));
        lines
    }
}
