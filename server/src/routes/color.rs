//! Color-picker sync endpoint.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use axum::extract::State;
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use prefs::color::Rgb;
use prefs::store::COLOR_COOKIE;

use crate::routes::cookies::pref_cookie;
use crate::state::AppState;

/// Raw request body: channel integers as sent, before clamping.
#[derive(Debug, Deserialize)]
pub struct ColorSyncBody {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

/// Response body: the hex string that was persisted.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSaved {
    pub color: String,
}

/// Clamp the pushed channels into a valid color.
pub(crate) fn normalize(body: &ColorSyncBody) -> Rgb {
    Rgb::new(
        Rgb::clamp_channel(body.red),
        Rgb::clamp_channel(body.green),
        Rgb::clamp_channel(body.blue),
    )
}

/// `POST /cgi-bin/color` — persist the pushed color as a `#rrggbb` cookie
/// and return it.
pub async fn save_color(
    State(state): State<AppState>,
    Json(body): Json<ColorSyncBody>,
) -> (CookieJar, Json<ColorSaved>) {
    let hex = normalize(&body).to_hex();
    tracing::debug!(color = %hex, "saving color");

    let jar = CookieJar::new().add(pref_cookie(COLOR_COOKIE, &hex, state.cookie_secure));
    (jar, Json(ColorSaved { color: hex }))
}
