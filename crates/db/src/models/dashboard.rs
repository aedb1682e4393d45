//! Admin dashboard projection.

use serde::Serialize;
use sqlx::FromRow;

/// Aggregate totals served by `GET /admin/concert/dashboard`.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    /// Sum of remaining seats across all concerts.
    pub total_seats: i64,
    /// Count of RESERVE entries in the history log.
    pub total_reserve_reservation: i64,
    /// Count of CANCEL entries in the history log.
    pub total_cancel_reservation: i64,
}
