pub mod admin;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                          service + db health
///
/// /admin/concert                                   create, list
/// /admin/concert/{id}                              delete (cascades)
/// /admin/concert/reservation/history               history feed
/// /admin/concert/dashboard                         aggregate totals
///
/// /user/concert                                    list + reservation status
/// /user/concert/{id}/reservation/reserve           reserve a seat
/// /user/concert/{id}/reservation/cancel            cancel a reservation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin/concert", admin::router())
        .nest("/user/concert", user::router())
}
