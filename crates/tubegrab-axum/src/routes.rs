//! Route definitions and router construction.

use axum::Router;
use axum::http::header::CONTENT_DISPOSITION;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AppContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
///
/// `Content-Disposition` is exposed so browser clients can read the
/// attachment name.
pub(crate) fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = match config {
        CorsConfig::AllowAll => CorsLayer::new().allow_origin(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new().allow_origin(allowed)
        }
    };

    layer
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([CONTENT_DISPOSITION])
}

/// API routes without the `/api` prefix, for nesting under `/api`.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/download", post(handlers::download::download))
        .route("/playlist", post(handlers::playlist::playlist))
        .fallback(handlers::not_found)
}

/// Health check plus the nested API, without middleware.
fn base_router(ctx: AppContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes().with_state(state))
}

/// Apply CORS and request tracing to every route, fallbacks included.
fn with_middleware(router: Router, cors_config: &CorsConfig) -> Router {
    router
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Create the main router with API routes and the health check.
///
/// For serving a landing page alongside the API, use
/// [`create_spa_router`].
pub fn create_router(ctx: AppContext, cors_config: &CorsConfig) -> Router {
    with_middleware(base_router(ctx), cors_config)
}

/// Create a router with API routes and static asset serving.
///
/// Non-API paths are served from `static_dir`, falling back to
/// `index.html` for paths without a matching file.
pub fn create_spa_router<P: AsRef<Path>>(
    ctx: AppContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let static_path = static_dir.as_ref();
    let index_path = static_path.join("index.html");

    let serve_dir = ServeDir::new(static_path).fallback(ServeFile::new(&index_path));

    with_middleware(base_router(ctx).fallback_service(serve_dir), cors_config)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
