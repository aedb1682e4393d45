//! Handlers for the `/user/concert` surface.
//!
//! All actions run as the hardcoded mock user; there is no
//! authentication.

use axum::extract::{Path, State};
use axum::Json;
use stagepass_core::types::{DbId, MOCK_USER_ID};
use stagepass_db::coordinator::ReservationCoordinator;
use stagepass_db::models::concert::UserConcert;
use stagepass_db::models::reservation::Reservation;
use stagepass_db::repositories::ConcertRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /user/concert
///
/// Lists every concert with the mock user's current reservation status
/// (`NONE` when the user never held one).
pub async fn list_concerts(State(state): State<AppState>) -> AppResult<Json<Vec<UserConcert>>> {
    let concerts = ConcertRepo::list_for_user(&state.pool, MOCK_USER_ID).await?;
    Ok(Json(concerts))
}

/// POST /user/concert/{id}/reservation/reserve
pub async fn reserve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationCoordinator::reserve(&state.pool, id, MOCK_USER_ID).await?;
    tracing::info!(concert_id = id, user_id = MOCK_USER_ID, "Seat reserved");
    Ok(Json(reservation))
}

/// POST /user/concert/{id}/reservation/cancel
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationCoordinator::cancel(&state.pool, id, MOCK_USER_ID).await?;
    tracing::info!(concert_id = id, user_id = MOCK_USER_ID, "Reservation cancelled");
    Ok(Json(reservation))
}
