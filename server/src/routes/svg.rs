//! SVG greeting generators.
//!
//! Two renderers, both pure string builders over a `name` query parameter:
//! a single-line greeting and the tilted repeating banner. The banner keeps
//! the original geometry: text is scaled by `9 / message length` so longer
//! names shrink to fit, and 25 staggered rows fill the viewport.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::routes::cgi::escape_html;

const BANNER_ROWS: usize = 25;

#[derive(Debug, Deserialize)]
pub struct GreetingParams {
    pub name: Option<String>,
}

fn message_for(params: &GreetingParams) -> String {
    let name = params.name.as_deref().unwrap_or("World");
    format!("Hello {name}!")
}

/// Build the single-line greeting SVG.
pub(crate) fn greeting_svg(message: &str) -> String {
    let text = escape_html(message);
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1000 300\" \
         style=\"background-color: #596886;\">\n\
         <text x=\"50%\" y=\"50%\" text-anchor=\"middle\" alignment-baseline=\"middle\" \
         font-size=\"96\" fill=\"#ffb414\">{text}</text>\n</svg>\n"
    )
}

/// Build the tilted banner SVG: rows of the same message, gradient-filled.
pub(crate) fn banner_svg(message: &str) -> String {
    let text = escape_html(message);
    let scale = banner_scale(message);
    let tx = (1.0 - scale) * 500.0;

    let mut svg = String::from(
        "<svg width=\"100%\" height=\"100%\" style=\"background-color: #596886;\" \
         xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1000 600\">\n<defs>\n\
         <linearGradient id=\"gradient\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">\n\
         <stop offset=\"0%\" style=\"stop-color:rgb(255,180,20);stop-opacity:1\" />\n\
         <stop offset=\"100%\" style=\"stop-color:rgb(255,20,180);stop-opacity:1\" />\n\
         </linearGradient>\n</defs>\n",
    );
    for row in 0..BANNER_ROWS {
        let ty = -1000.0 + (row as f64) * 100.0;
        svg.push_str(&format!(
            "<g transform=\"translate({tx}, {ty}) scale({scale}) rotate(-15 500 300)\">\n\
             <text x=\"50%\" y=\"50%\" alignment-baseline=\"middle\" text-anchor=\"middle\" \
             font-size=\"120\" fill=\"url(#gradient)\" stroke=\"#fff\" stroke-width=\"2\">{text}</text>\n\
             </g>\n"
        ));
    }
    svg.push_str("</svg>\n");
    svg
}

/// Text scale for the banner; longer messages shrink to fit a row.
pub(crate) fn banner_scale(message: &str) -> f64 {
    9.0 / message.chars().count().max(1) as f64
}

fn svg_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], body).into_response()
}

/// `GET /cgi-bin/greeting.svg?name=` — single-line greeting image.
pub async fn greeting(Query(params): Query<GreetingParams>) -> Response {
    svg_response(greeting_svg(&message_for(&params)))
}

/// `GET /cgi-bin/banner.svg?name=` — tilted repeating banner image.
pub async fn banner(Query(params): Query<GreetingParams>) -> Response {
    svg_response(banner_svg(&message_for(&params)))
}
