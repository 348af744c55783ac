#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    if config.session.secret_generated {
        tracing::warn!("SESSION_SECRET not set; generated a per-process secret, sessions end on restart");
    }
    let port = config.port;

    let backend = services::backend::HttpBackend::new(&config.backend).expect("backend client init failed");
    tracing::info!(backend = backend.base_url(), "backend of record configured");

    let state = state::AppState::new(config, Arc::new(backend));

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "curator listening");
    axum::serve(listener, app).await.expect("server failed");
}
