//! The cookie file: a one-line stand-in for the browser cookie store.
//!
//! The file holds a single `name=value; name=value` line. A missing file is
//! an empty store, and a malformed line degrades to whatever pairs can be
//! read from it — loading never fails on content, only on I/O.

#[cfg(test)]
#[path = "cookiefile_test.rs"]
mod cookiefile_test;

use std::io;
use std::path::Path;

use prefs::cookie;

/// Read the persisted cookie line. Missing file means no cookies yet.
pub fn load(path: &Path) -> io::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(line) => Ok(line.trim().to_owned()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err),
    }
}

/// Merge `Set-Cookie` header values into the stored line and write it back.
pub fn apply(path: &Path, current: &str, set_cookies: &[String]) -> io::Result<()> {
    let merged = merge(current, set_cookies);
    std::fs::write(path, format!("{merged}\n"))
}

/// Fold `Set-Cookie` values into an existing cookie line.
///
/// Only the leading `name=value` of each header matters here; attributes
/// like `Path` and `Max-Age` are directives to a real browser, not state.
pub(crate) fn merge(current: &str, set_cookies: &[String]) -> String {
    let mut pairs = cookie::parse(current);
    for header in set_cookies {
        let leading = header.split(';').next().unwrap_or_default();
        if let Some((name, value)) = leading.split_once('=') {
            let name = name.trim();
            if !name.is_empty() {
                cookie::upsert(&mut pairs, name, value.trim());
            }
        }
    }
    cookie::format_pairs(&pairs)
}
