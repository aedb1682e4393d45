//! Route definitions for the admin concert surface.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes mounted at `/admin/concert`.
///
/// ```text
/// POST   /                        -> create_concert
/// GET    /                        -> list_concerts
/// DELETE /{id}                    -> delete_concert (cascades)
/// GET    /reservation/history     -> list_history (newest first)
/// GET    /dashboard               -> dashboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(admin::create_concert).get(admin::list_concerts))
        .route("/{id}", delete(admin::delete_concert))
        .route("/reservation/history", get(admin::list_history))
        .route("/dashboard", get(admin::dashboard))
}
