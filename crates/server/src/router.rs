use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/api/sources",
            post(handlers::create_source).get(handlers::list_sources),
        )
        .route(
            "/api/sources/{id}",
            get(handlers::get_source)
                .put(handlers::update_source)
                .delete(handlers::delete_source),
        )
        .route(
            "/api/notes",
            post(handlers::create_note).get(handlers::list_notes),
        )
        .route(
            "/api/notes/{id}",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
