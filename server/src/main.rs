mod routes;
mod state;

use std::path::PathBuf;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let www_dir = std::env::var("WWW_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("www"));

    let state = state::AppState::from_env();

    let app = routes::app(state, &www_dir);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, www_dir = %www_dir.display(), "shopfront listening");
    axum::serve(listener, app).await.expect("server failed");
}
