//! The classic CGI demo handlers: environment dump and URL echo.
//!
//! These are one-shot, stateless request handlers kept for parity with the
//! scripts they replace. Values are HTML-escaped before interpolation.

#[cfg(test)]
#[path = "cgi_test.rs"]
mod cgi_test;

use axum::http::{Method, Uri, header};
use axum::response::{Html, IntoResponse, Response};

/// Minimal HTML escaping for text interpolated into the demo pages.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the environment table from an iterator of variables.
pub(crate) fn env_table<I>(vars: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><title>Environment Variables</title></head>\n\
         <body>\n<table border='1'>\n<tr><th>Variable</th><th>Value</th></tr>\n",
    );
    for (key, value) in vars {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&key),
            escape_html(&value)
        ));
    }
    html.push_str("</table>\n</body>\n</html>\n");
    html
}

/// Render the echo page for one request line.
pub(crate) fn echo_page(method: &Method, uri: &Uri) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><title>Echo</title></head>\n<body>\n\
         <p>You requested <code>{} {}</code></p>\n</body>\n</html>\n",
        escape_html(method.as_str()),
        escape_html(&uri.to_string())
    )
}

/// `GET /cgi-bin/env` — dump the process environment as an HTML table.
pub async fn env_dump() -> Response {
    let html = env_table(std::env::vars());
    ([(header::CACHE_CONTROL, "no-store")], Html(html)).into_response()
}

/// `GET /cgi-bin/echo` — echo the request method and URL back as HTML.
pub async fn url_echo(method: Method, uri: Uri) -> Html<String> {
    Html(echo_page(&method, &uri))
}
