//! Best-effort sync client.
//!
//! ERROR HANDLING
//! ==============
//! `push_*` never surfaces a failure to the caller: a refused connection,
//! a non-2xx status, or an unreadable response is logged to stderr and the
//! push is dropped. There is no retry, no backoff, and no idempotency key —
//! delivery is at-most-once per user action by design. The response body is
//! only logged; local state is never updated from it.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use reqwest::header::SET_COOKIE;
use serde::Serialize;

use prefs::cart::Cart;
use prefs::color::Rgb;
use prefs::sync::{CartSync, ColorSync};

pub struct SyncClient {
    base_url: String,
    http: reqwest::Client,
}

impl SyncClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
        }
    }

    pub(crate) fn cart_url(&self) -> String {
        format!("{}/cgi-bin/cart", self.base_url)
    }

    pub(crate) fn color_url(&self) -> String {
        format!("{}/cgi-bin/color", self.base_url)
    }

    /// Push the cart; returns any `Set-Cookie` values to persist.
    pub async fn push_cart(&self, cart: Cart) -> Vec<String> {
        self.push(&self.cart_url(), &CartSync::from(cart)).await
    }

    /// Push the color; returns any `Set-Cookie` values to persist.
    pub async fn push_color(&self, color: Rgb) -> Vec<String> {
        self.push(&self.color_url(), &ColorSync::from(color)).await
    }

    async fn push<T: Serialize>(&self, url: &str, payload: &T) -> Vec<String> {
        let response = match self.http.post(url).json(payload).send().await {
            Ok(r) => r,
            Err(err) => {
                eprintln!("push to {url} failed: {err}");
                return Vec::new();
            }
        };
        if !response.status().is_success() {
            eprintln!("push to {url} rejected: {}", response.status());
            return Vec::new();
        }

        let cookies: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_owned)
            .collect();

        match response.json::<serde_json::Value>().await {
            Ok(body) => eprintln!("server echoed {body}"),
            Err(err) => eprintln!("push response unreadable: {err}"),
        }
        cookies
    }
}
