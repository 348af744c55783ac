//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the auth endpoints, the session-guarded backend
//! proxy under `/api`, the Leptos SSR pages behind the page gate, and the
//! compiled client assets under `/pkg`.

pub mod articles;
pub mod auth;
pub mod dashboard;
pub mod gate;
pub mod proxy;
pub mod settings;


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Auth, proxy, and liveness routes.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/articles", get(articles::list_articles))
        .route("/api/articles/{id}/approve", post(articles::approve_article))
        .route("/api/articles/{id}/reject", post(articles::reject_article))
        .route("/api/stats", get(dashboard::stats))
        .route("/api/logs", get(dashboard::logs))
        .route("/api/search", post(dashboard::trigger_search))
        .route("/api/publish", post(dashboard::trigger_publish))
        .route("/api/settings", get(settings::get_settings).post(settings::save_settings))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application: API routes + gated Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(curator_client::app::App);

    let pages = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || curator_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());
    let pages = gated(pages, state.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(pages)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Put UI page routes behind the session gate.
fn gated(pages: Router, state: AppState) -> Router {
    pages.layer(from_fn_with_state(state, gate::page_gate))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
