//! Tolerant parsing for browser cookie strings.
//!
//! The input is whatever the platform persisted — a `name=value; ...` line
//! from a `Cookie` header or the cookie file. Parsing never fails: segments
//! without an `=`, empty segments, and stray whitespace are skipped, and a
//! missing name is simply absent. Malformed input is data, not an error.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Split a cookie string into `(name, value)` pairs, in order of appearance.
#[must_use]
pub fn parse(raw: &str) -> Vec<(String, String)> {
    raw.split(';')
        .filter_map(|segment| {
            let segment = segment.trim();
            let (name, value) = segment.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_owned(), value.trim().to_owned()))
        })
        .collect()
}

/// Look up the first cookie named `name`.
#[must_use]
pub fn get<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.split(';').find_map(|segment| {
        let segment = segment.trim();
        let (n, v) = segment.split_once('=')?;
        (n.trim() == name).then_some(v.trim())
    })
}

/// Read a non-negative integer cookie; absent or non-numeric yields `None`.
#[must_use]
pub fn get_count(raw: &str, name: &str) -> Option<i64> {
    get(raw, name)?.parse::<i64>().ok()
}

/// Render pairs back into a single cookie line for the cookie file.
#[must_use]
pub fn format_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Insert or replace `name` in an existing pair list, preserving order.
pub fn upsert(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    if let Some(slot) = pairs.iter_mut().find(|(n, _)| n == name) {
        slot.1 = value.to_owned();
    } else {
        pairs.push((name.to_owned(), value.to_owned()));
    }
}
