//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR serves the five screen routes; everything else is either
//! `/healthz` or a static file from the Leptos site root (WASM bundle,
//! stylesheet, background image). Missing files answer 404.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use meditrack_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Non-UI endpoints.
fn api_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: SSR screens, health check, and static assets.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    tracing::debug!(count = routes.len(), "registered leptos routes");

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options);

    api_routes()
        .merge(leptos_router)
        .fallback_service(ServeDir::new(site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
