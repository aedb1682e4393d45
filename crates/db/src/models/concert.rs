//! Concert entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stagepass_core::types::{DbId, Timestamp};

use crate::models::status::ReservationStatus;

/// A row from the `concerts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Concert {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Fixed capacity, immutable after creation.
    pub total_seat: i32,
    /// Remaining seats; only the coordinator may change this.
    pub current_total_seat: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a new concert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConcert {
    pub name: String,
    pub total_seat: i32,
    pub description: String,
}

/// A concert joined with the requesting user's current reservation state.
///
/// `reservation_status` is `NONE` when the user never held a reservation
/// for the concert.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConcert {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub total_seat: i32,
    pub current_total_seat: i32,
    pub reservation_status: ReservationStatus,
}
