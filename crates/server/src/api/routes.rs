//! Router assembly for the `/api/v1` surface and static files.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::{favorites, handlers, middleware::metrics_middleware, movies, search, ws};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Browser front-end static files (configurable via env)
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "web".to_string());

    let api_routes = Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::get_metrics))
        .route("/view", get(handlers::get_view))
        // Search
        .route("/search", post(search::submit_query))
        .route("/search/more", post(search::load_more))
        // Favorites
        .route("/favorites", get(favorites::list_favorites))
        .route("/favorites/toggle", post(favorites::toggle_favorite))
        // Movie cards and watch history
        .route("/movies/{id}/open", post(movies::open_movie))
        .route("/recently-watched", get(movies::recently_watched))
        // Live view updates
        .route("/ws", get(ws::ws_handler))
        .layer(middleware::from_fn(metrics_middleware))
        .with_state(state);

    let index_path = format!("{}/index.html", static_dir);
    let serve_dir = ServeDir::new(&static_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .nest("/api/v1", api_routes)
        .fallback_service(serve_dir)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
