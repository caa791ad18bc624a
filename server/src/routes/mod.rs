//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The demo pages are static files served from `www/`; everything the pages
//! (or the native CLI) talk to lives under `/cgi-bin/`, mirroring the CGI
//! scripts this server replaces. Preference endpoints persist nothing on the
//! server side — state round-trips through the cookies they set.

pub mod calc;
pub mod cart;
pub mod cgi;
pub mod color;
pub mod cookies;
pub mod svg;
pub mod upload;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: `/cgi-bin/` endpoints plus the static pages.
pub fn app(state: AppState, www_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let www = ServeDir::new(www_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/cgi-bin/cart", post(cart::save_cart))
        .route("/cgi-bin/color", post(color::save_color))
        .route("/cgi-bin/env", get(cgi::env_dump))
        .route("/cgi-bin/echo", get(cgi::url_echo))
        .route("/cgi-bin/calculator", get(calc::calculator))
        .route("/cgi-bin/upload", post(upload::upload))
        .route("/cgi-bin/greeting.svg", get(svg::greeting))
        .route("/cgi-bin/banner.svg", get(svg::banner))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .fallback_service(www)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
