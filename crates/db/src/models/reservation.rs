//! Reservation ledger entity model.

use serde::Serialize;
use sqlx::FromRow;
use stagepass_core::types::{DbId, Timestamp};

use crate::models::status::ReservationStatus;

/// A row from the `reservations` table: the current booking state of one
/// user against one concert. One row per (concert, user) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: DbId,
    pub concert_id: DbId,
    pub user_id: DbId,
    pub status: ReservationStatus,
    /// Timestamp of the last transition, refreshed on every upsert.
    pub created_at: Timestamp,
}
