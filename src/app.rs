use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route(
            "/api/entries/:id",
            patch(handlers::edit_entry).delete(handlers::remove_entry),
        )
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
