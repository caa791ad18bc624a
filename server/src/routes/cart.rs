//! Shopping-cart sync endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Out-of-range counts are clamped, never rejected: the client is a dumb
//! page (or CLI) pushing whatever it has, and a 4xx here would only be
//! dropped on the floor by the fire-and-forget caller anyway.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use axum::extract::State;
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use prefs::cart::{Cart, ITEMS};
use prefs::sync::CartSync;

use crate::routes::cookies::pref_cookie;
use crate::state::AppState;

/// Raw request body: integers as sent, before clamping.
#[derive(Debug, Deserialize)]
pub struct CartSyncBody {
    pub paperclip: i64,
    pub monalisa: i64,
    pub spaceshuttle: i64,
}

/// Clamp the pushed counts into a valid cart.
pub(crate) fn normalize(body: &CartSyncBody) -> Cart {
    Cart {
        paperclip: Cart::clamp_count(body.paperclip),
        monalisa: Cart::clamp_count(body.monalisa),
        spaceshuttle: Cart::clamp_count(body.spaceshuttle),
    }
}

/// `POST /cgi-bin/cart` — persist pushed counts as one cookie per item and
/// echo the normalized state.
pub async fn save_cart(
    State(state): State<AppState>,
    Json(body): Json<CartSyncBody>,
) -> (CookieJar, Json<CartSync>) {
    let cart = normalize(&body);
    tracing::debug!(
        paperclip = cart.paperclip,
        monalisa = cart.monalisa,
        spaceshuttle = cart.spaceshuttle,
        "saving cart"
    );

    let mut jar = CookieJar::new();
    for item in ITEMS {
        jar = jar.add(pref_cookie(item.key(), &cart.count(item).to_string(), state.cookie_secure));
    }
    (jar, Json(CartSync::from(cart)))
}
