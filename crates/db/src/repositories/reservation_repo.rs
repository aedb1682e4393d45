//! Repository for the `reservations` table (the ledger).

use stagepass_core::types::DbId;

use crate::models::reservation::Reservation;
use crate::models::status::ReservationStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, concert_id, user_id, status, created_at";

/// Provides current-state ledger operations.
///
/// All methods take a transaction: ledger reads must be consistent with
/// the coordinator's enclosing unit of work, never stale.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Find the current reservation row for a (concert, user) pair.
    ///
    /// A missing row is equivalent to status `NONE`.
    pub async fn find_by_pair(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        concert_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reservations WHERE concert_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(concert_id)
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Create or update the pair's row, refreshing status and timestamp.
    ///
    /// `ON CONFLICT (concert_id, user_id)` guarantees one row per pair,
    /// so "the current reservation" is a keyed lookup rather than a
    /// most-recent scan.
    pub async fn upsert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        concert_id: DbId,
        user_id: DbId,
        status: ReservationStatus,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (concert_id, user_id, status, created_at) \
             VALUES ($1, $2, $3, NOW()) \
             ON CONFLICT (concert_id, user_id) DO UPDATE \
             SET status = EXCLUDED.status, created_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(concert_id)
            .bind(user_id)
            .bind(status)
            .fetch_one(&mut **tx)
            .await
    }

    /// Delete all ledger rows for a concert. Cascade delete only.
    pub async fn delete_by_concert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        concert_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE concert_id = $1")
            .bind(concert_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
