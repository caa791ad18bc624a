use super::*;

// --- escape_html ---

#[test]
fn escape_html_passes_plain_text() {
    assert_eq!(escape_html("PATH"), "PATH");
}

#[test]
fn escape_html_escapes_markup() {
    assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    assert_eq!(escape_html("a&b"), "a&amp;b");
    assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    assert_eq!(escape_html("it's"), "it&#x27;s");
}

#[test]
fn escape_html_empty() {
    assert_eq!(escape_html(""), "");
}

// --- env_table ---

#[test]
fn env_table_lists_variables() {
    let html = env_table(vec![("HOME".to_owned(), "/root".to_owned())]);
    assert!(html.contains("<td>HOME</td>"));
    assert!(html.contains("<td>/root</td>"));
    assert!(html.contains("<table"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn env_table_escapes_values() {
    let html = env_table(vec![("EVIL".to_owned(), "<img onerror=x>".to_owned())]);
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img"));
}

#[test]
fn env_table_empty_environment() {
    let html = env_table(Vec::new());
    assert!(html.contains("<th>Variable</th>"));
}

// --- echo_page ---

#[test]
fn echo_page_contains_method_and_uri() {
    let uri: Uri = "/cgi-bin/echo?x=1".parse().unwrap();
    let html = echo_page(&Method::GET, &uri);
    assert!(html.contains("GET /cgi-bin/echo?x=1"));
}

#[test]
fn echo_page_escapes_uri() {
    let uri: Uri = "/echo?q=%3Cscript%3E".parse().unwrap();
    let html = echo_page(&Method::GET, &uri);
    assert!(!html.contains("<script>"));
}
