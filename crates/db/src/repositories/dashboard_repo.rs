//! Read-side aggregation for the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardTotals;

/// Pure read projection over the catalog and the history log.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute dashboard totals in a single consistent read.
    pub async fn totals(pool: &PgPool) -> Result<DashboardTotals, sqlx::Error> {
        sqlx::query_as::<_, DashboardTotals>(
            "SELECT \
                COALESCE((SELECT SUM(current_total_seat)::BIGINT FROM concerts), 0) \
                    AS total_seats, \
                (SELECT COUNT(*) FROM reservation_history WHERE status = 'RESERVE') \
                    AS total_reserve_reservation, \
                (SELECT COUNT(*) FROM reservation_history WHERE status = 'CANCEL') \
                    AS total_cancel_reservation",
        )
        .fetch_one(pool)
        .await
    }
}
