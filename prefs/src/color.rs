#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use serde::{Deserialize, Serialize};

/// An RGB color with one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Fallback color when no valid color cookie is present: mid-gray `#808080`.
pub const DEFAULT_COLOR: Rgb = Rgb { red: 0x80, green: 0x80, blue: 0x80 };

impl Default for Rgb {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl Rgb {
    #[must_use]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a strict 7-character `#RRGGBB` string.
    ///
    /// Anything else — wrong length, missing `#`, non-hex digits — yields
    /// `None`. Malformed persisted data is data, not an error condition:
    /// callers substitute [`DEFAULT_COLOR`] rather than failing.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let bytes = raw.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' || !raw.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&raw[i..i + 2], 16).ok();
        Some(Self {
            red: channel(1)?,
            green: channel(3)?,
            blue: channel(5)?,
        })
    }

    /// Format as lowercase `#rrggbb`, the shape the color cookie stores.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Clamp an untrusted integer into a channel value.
    ///
    /// Out-of-range input is clamped, not rejected — the same policy the
    /// cart applies to counts.
    #[must_use]
    pub fn clamp_channel(value: i64) -> u8 {
        value.clamp(0, 255) as u8
    }
}
