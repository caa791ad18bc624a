use super::*;

#[test]
fn pref_cookie_sets_path_and_max_age() {
    let c = pref_cookie("paperclip", "3", false);
    assert_eq!(c.name(), "paperclip");
    assert_eq!(c.value(), "3");
    assert_eq!(c.path(), Some("/"));
    assert_eq!(c.max_age(), Some(Duration::seconds(MAX_AGE_SECONDS)));
}

#[test]
fn pref_cookie_is_readable_by_scripts() {
    let c = pref_cookie("color", "#808080", false);
    assert_ne!(c.http_only(), Some(true));
}

#[test]
fn pref_cookie_secure_flag_follows_policy() {
    assert_eq!(pref_cookie("a", "1", true).secure(), Some(true));
    assert_eq!(pref_cookie("a", "1", false).secure(), Some(false));
}

#[test]
fn max_age_is_one_year() {
    assert_eq!(MAX_AGE_SECONDS, 365 * 24 * 60 * 60);
}
