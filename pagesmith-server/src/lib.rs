pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod generation;
pub mod middleware;
pub mod sse;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use state::AppState;

/// Full application: API routes, permissive CORS for the dev UI server, and the
/// built frontend as fallback so client-side paths resolve to `index.html`.
pub fn app(state: Arc<AppState>, frontend_dist: &str) -> Router {
    let frontend = ServeDir::new(frontend_dist)
        .not_found_service(ServeFile::new(format!("{frontend_dist}/index.html")));

    api::router()
        .fallback_service(frontend)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
