//! Repository for the `concerts` table.

use sqlx::PgPool;
use stagepass_core::types::DbId;

use crate::models::concert::{Concert, CreateConcert, UserConcert};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, total_seat, current_total_seat, created_at";

/// Provides catalog operations for concerts.
///
/// Seat-count mutation and deletion are transaction-scoped and reachable
/// only through the coordinator.
pub struct ConcertRepo;

impl ConcertRepo {
    /// Insert a new concert with `current_total_seat = total_seat`.
    ///
    /// Input is validated at the HTTP boundary before this is called.
    pub async fn create(pool: &PgPool, input: &CreateConcert) -> Result<Concert, sqlx::Error> {
        let query = format!(
            "INSERT INTO concerts (name, description, total_seat, current_total_seat) \
             VALUES ($1, $2, $3, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Concert>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.total_seat)
            .fetch_one(pool)
            .await
    }

    /// Find a concert by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Concert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM concerts WHERE id = $1");
        sqlx::query_as::<_, Concert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a concert by ID, taking a row lock for the enclosing
    /// transaction.
    ///
    /// Every mutating coordinator flow acquires this lock first, which
    /// serializes concurrent reserve/cancel/delete requests per concert.
    pub async fn find_by_id_for_update(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<Option<Concert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM concerts WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Concert>(&query)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// List all concerts in creation order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Concert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM concerts ORDER BY id ASC");
        sqlx::query_as::<_, Concert>(&query).fetch_all(pool).await
    }

    /// List all concerts joined with the given user's current reservation
    /// state, `NONE` where the user never held one.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserConcert>, sqlx::Error> {
        sqlx::query_as::<_, UserConcert>(
            "SELECT c.id, c.name, c.description, c.total_seat, c.current_total_seat, \
                    COALESCE(r.status, 'NONE'::reservation_status) AS reservation_status \
             FROM concerts c \
             LEFT JOIN reservations r ON r.concert_id = c.id AND r.user_id = $1 \
             ORDER BY c.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Adjust the remaining seat count by `delta` within the enclosing
    /// transaction.
    ///
    /// Returns `false` (without modifying the row) if the result would
    /// fall outside `0..=total_seat`, which aborts the coordinator flow.
    pub async fn adjust_seats(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
        delta: i32,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE concerts \
             SET current_total_seat = current_total_seat + $2 \
             WHERE id = $1 \
               AND current_total_seat + $2 >= 0 \
               AND current_total_seat + $2 <= total_seat",
        )
        .bind(id)
        .bind(delta)
        .execute(&mut **tx)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a concert within the enclosing transaction.
    ///
    /// Returns `true` if a row was removed. Dependent ledger and history
    /// rows are deleted explicitly by the coordinator in the same unit.
    pub async fn delete(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM concerts WHERE id = $1")
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
