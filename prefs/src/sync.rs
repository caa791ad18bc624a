//! Fixed-key payloads for the best-effort push.
//!
//! Each push serializes all and only the documented key set, regardless of
//! which keys the last interaction touched — the server round-trips the
//! whole state into cookies, so a partial payload would drop fields.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::color::Rgb;

/// Body of `POST /cgi-bin/cart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSync {
    pub paperclip: u32,
    pub monalisa: u32,
    pub spaceshuttle: u32,
}

impl From<Cart> for CartSync {
    fn from(cart: Cart) -> Self {
        Self {
            paperclip: cart.paperclip,
            monalisa: cart.monalisa,
            spaceshuttle: cart.spaceshuttle,
        }
    }
}

/// Body of `POST /cgi-bin/color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSync {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<Rgb> for ColorSync {
    fn from(color: Rgb) -> Self {
        Self { red: color.red, green: color.green, blue: color.blue }
    }
}
