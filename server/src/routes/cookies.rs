//! Cookie construction shared by the preference endpoints.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Preference cookies live for a year, like the CGI scripts set them.
pub(crate) const MAX_AGE_SECONDS: i64 = 31_536_000;

/// Build one preference cookie.
///
/// Deliberately not `HttpOnly`: the demo pages read these back from
/// `document.cookie` to restore state on load.
pub(crate) fn pref_cookie(name: &str, value: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((name.to_owned(), value.to_owned()))
        .path("/")
        .max_age(Duration::seconds(MAX_AGE_SECONDS))
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}
