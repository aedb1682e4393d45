//! Repository for the `reservation_history` table.

use sqlx::PgPool;
use stagepass_core::types::DbId;

use crate::models::history::HistoryEntry;
use crate::models::status::ReservationStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, concert_id, concert_name, user_id, status, created_at";

/// Append-only audit log of reservation transitions.
pub struct HistoryRepo;

impl HistoryRepo {
    /// Append one entry within the enclosing transaction.
    ///
    /// `concert_name` is snapshotted here so the entry stays meaningful
    /// independent of the live concert row.
    pub async fn append(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        concert_id: DbId,
        concert_name: &str,
        user_id: DbId,
        status: ReservationStatus,
    ) -> Result<HistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservation_history (concert_id, concert_name, user_id, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .bind(concert_id)
            .bind(concert_name)
            .bind(user_id)
            .bind(status)
            .fetch_one(&mut **tx)
            .await
    }

    /// List all entries, newest first. Ties on `created_at` break by
    /// highest id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<HistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservation_history ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, HistoryEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete all entries for a concert. Cascade delete only.
    pub async fn delete_by_concert(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        concert_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservation_history WHERE concert_id = $1")
            .bind(concert_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
