//! Handlers for the `/admin/concert` surface: catalog management, the
//! reservation history feed, and dashboard aggregation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use stagepass_core::concert;
use stagepass_core::types::DbId;
use stagepass_db::coordinator::ReservationCoordinator;
use stagepass_db::models::concert::{Concert, CreateConcert};
use stagepass_db::models::dashboard::DashboardTotals;
use stagepass_db::models::history::HistoryEntry;
use stagepass_db::repositories::{ConcertRepo, DashboardRepo, HistoryRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /admin/concert
pub async fn create_concert(
    State(state): State<AppState>,
    Json(input): Json<CreateConcert>,
) -> AppResult<(StatusCode, Json<Concert>)> {
    concert::validate_new(&input.name, input.total_seat, &input.description)?;
    let created = ConcertRepo::create(&state.pool, &input).await?;
    tracing::info!(concert_id = created.id, total_seat = created.total_seat, "Concert created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /admin/concert
pub async fn list_concerts(State(state): State<AppState>) -> AppResult<Json<Vec<Concert>>> {
    let concerts = ConcertRepo::list_all(&state.pool).await?;
    Ok(Json(concerts))
}

/// DELETE /admin/concert/{id}
///
/// Removes the concert together with its ledger rows and history, in one
/// transaction.
pub async fn delete_concert(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ReservationCoordinator::remove_concert(&state.pool, id).await?;
    Ok(StatusCode::OK)
}

/// GET /admin/concert/reservation/history
pub async fn list_history(State(state): State<AppState>) -> AppResult<Json<Vec<HistoryEntry>>> {
    let history = HistoryRepo::list_all(&state.pool).await?;
    Ok(Json(history))
}

/// GET /admin/concert/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardTotals>> {
    let totals = DashboardRepo::totals(&state.pool).await?;
    Ok(Json(totals))
}
