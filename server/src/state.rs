//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! preference endpoints are stateless by design — the cookies they set ARE
//! the persistence — so the state carries only the cookie policy and the
//! upload target directory.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::path::PathBuf;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Whether preference cookies are marked `Secure`. Off by default so the
    /// plain-HTTP demo pages keep working.
    pub cookie_secure: bool,
    /// Directory the upload demo writes into.
    pub upload_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(cookie_secure: bool) -> Self {
        Self { cookie_secure, upload_dir: std::env::temp_dir() }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let mut state = Self::new(env_bool("COOKIE_SECURE").unwrap_or(false));
        if let Ok(dir) = std::env::var("UPLOAD_DIR") {
            state.upload_dir = PathBuf::from(dir);
        }
        state
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
