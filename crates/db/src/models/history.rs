//! Reservation history entity model.

use serde::Serialize;
use sqlx::FromRow;
use stagepass_core::types::{DbId, Timestamp};

use crate::models::status::ReservationStatus;

/// A row from the `reservation_history` table.
///
/// Immutable once written. `concert_name` is denormalized at write time
/// rather than joined at read time.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: DbId,
    pub concert_id: DbId,
    pub concert_name: String,
    pub user_id: DbId,
    pub status: ReservationStatus,
    pub created_at: Timestamp,
}
