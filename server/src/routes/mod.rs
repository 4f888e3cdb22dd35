//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the small JSON API, Leptos SSR rendering, and the
//! public asset directory under a single Axum router. Leptos renders with
//! the startup `AppConfig` in context, so head tags and the devtools flag
//! match what the server loaded.
//!
//! Paths with no Leptos route go to `file_and_error_handler`: a file under
//! the site root if one exists, otherwise the app shell with its not-found
//! page and a `404`. A redirect set by the route guard during that render
//! keeps its `302`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler_with_context, generate_route_list};
use orkitt_client::app::{App, shell};
use orkitt_client::config::PublicRuntimeConfig;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::state::AppState;

/// JSON endpoints that do not depend on Leptos.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/config", get(public_config))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Leptos SSR for the client routes, with the site root (the WASM bundle in
/// `pkg/` plus the copied public assets) and the not-found page behind them.
/// Gzip-compressed when `compress_public_assets` is set.
pub fn site_routes(leptos_options: LeptosOptions, state: &AppState) -> Router {
    let routes = generate_route_list(App);

    let config = state.config.clone();
    let context = move || provide_context(config.clone());
    let app_shell = {
        let opts = leptos_options.clone();
        move || shell(opts.clone())
    };

    let router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, context.clone(), app_shell)
        .fallback(file_and_error_handler_with_context(context, shell))
        .with_state(leptos_options);

    if state.config.compress_public_assets { router.layer(CompressionLayer::new()) } else { router }
}

/// Full application: API routes + Leptos SSR + public assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(state: AppState) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let site = site_routes(conf.leptos_options, &state);

    Ok(api_routes(state).merge(site).layer(TraceLayer::new_for_http()))
}

async fn public_config(State(state): State<AppState>) -> Json<PublicRuntimeConfig> {
    Json(state.config.public.clone())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
