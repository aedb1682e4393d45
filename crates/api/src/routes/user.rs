//! Route definitions for the user concert surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// User routes mounted at `/user/concert`.
///
/// ```text
/// GET  /                              -> list_concerts (+ reservation status)
/// POST /{id}/reservation/reserve      -> reserve
/// POST /{id}/reservation/cancel       -> cancel
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_concerts))
        .route("/{id}/reservation/reserve", post(user::reserve))
        .route("/{id}/reservation/cancel", post(user::cancel))
}
