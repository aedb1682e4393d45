//! Reservation coordinator: the transactional core of the service.
//!
//! Every mutating operation runs inside a single transaction spanning the
//! catalog, the ledger, and the history log. The transaction starts by
//! locking the concert row (`SELECT ... FOR UPDATE`), so concurrent
//! reserve/cancel/delete requests for the same concert serialize: the
//! check-then-act sequence (seat count, current reservation state) is
//! indivisible with respect to other requests touching the concert.
//!
//! On any failure before commit the transaction is dropped, which rolls
//! it back. Partial application (a decremented seat count without a
//! history row, or vice versa) is never observable.

use sqlx::PgPool;
use stagepass_core::error::CoreError;
use stagepass_core::types::DbId;

use crate::models::reservation::Reservation;
use crate::models::status::ReservationStatus;
use crate::repositories::{ConcertRepo, HistoryRepo, ReservationRepo};

/// Error surfaced by coordinator flows.
#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    /// A business-rule failure; never retried.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// A storage failure; the whole operation rolled back.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Attempts for a flow hitting transient storage contention.
const MAX_ATTEMPTS: u32 = 3;

/// Orchestrates atomic reserve/cancel/delete flows.
pub struct ReservationCoordinator;

impl ReservationCoordinator {
    /// Reserve a seat for `user_id` on `concert_id`.
    ///
    /// Fails with NotFound if the concert is missing, Capacity when no
    /// seats remain, and Conflict when the user already holds an active
    /// reservation.
    pub async fn reserve(
        pool: &PgPool,
        concert_id: DbId,
        user_id: DbId,
    ) -> Result<Reservation, CoordinatorError> {
        let mut attempt = 1;
        loop {
            match Self::reserve_once(pool, concert_id, user_id).await {
                Err(CoordinatorError::Database(err))
                    if attempt < MAX_ATTEMPTS && is_transient(&err) =>
                {
                    tracing::warn!(attempt, error = %err, "Retrying reserve after transient conflict");
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// Cancel the user's reservation on `concert_id`.
    ///
    /// Fails with NotFound if the concert or the reservation is missing,
    /// and Conflict when the reservation is already cancelled.
    pub async fn cancel(
        pool: &PgPool,
        concert_id: DbId,
        user_id: DbId,
    ) -> Result<Reservation, CoordinatorError> {
        let mut attempt = 1;
        loop {
            match Self::cancel_once(pool, concert_id, user_id).await {
                Err(CoordinatorError::Database(err))
                    if attempt < MAX_ATTEMPTS && is_transient(&err) =>
                {
                    tracing::warn!(attempt, error = %err, "Retrying cancel after transient conflict");
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// Delete a concert together with its ledger rows and history.
    pub async fn remove_concert(pool: &PgPool, id: DbId) -> Result<(), CoordinatorError> {
        let mut tx = pool.begin().await?;

        ConcertRepo::find_by_id_for_update(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Concert",
                id,
            })?;

        let history_rows = HistoryRepo::delete_by_concert(&mut tx, id).await?;
        let ledger_rows = ReservationRepo::delete_by_concert(&mut tx, id).await?;
        ConcertRepo::delete(&mut tx, id).await?;

        tx.commit().await?;
        tracing::info!(concert_id = id, ledger_rows, history_rows, "Concert removed");
        Ok(())
    }

    async fn reserve_once(
        pool: &PgPool,
        concert_id: DbId,
        user_id: DbId,
    ) -> Result<Reservation, CoordinatorError> {
        let mut tx = pool.begin().await?;

        let concert = ConcertRepo::find_by_id_for_update(&mut tx, concert_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Concert",
                id: concert_id,
            })?;

        if concert.current_total_seat <= 0 {
            return Err(CoreError::Capacity("No more seats available".to_string()).into());
        }

        let current = ReservationRepo::find_by_pair(&mut tx, concert_id, user_id)
            .await?
            .map(|r| r.status)
            .unwrap_or(ReservationStatus::None);
        let next = current.reserve()?;

        let reservation = ReservationRepo::upsert(&mut tx, concert_id, user_id, next).await?;
        adjust_or_abort(&mut tx, concert_id, -1).await?;
        HistoryRepo::append(&mut tx, concert_id, &concert.name, user_id, next).await?;

        tx.commit().await?;
        Ok(reservation)
    }

    async fn cancel_once(
        pool: &PgPool,
        concert_id: DbId,
        user_id: DbId,
    ) -> Result<Reservation, CoordinatorError> {
        let mut tx = pool.begin().await?;

        let concert = ConcertRepo::find_by_id_for_update(&mut tx, concert_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Concert",
                id: concert_id,
            })?;

        let current = ReservationRepo::find_by_pair(&mut tx, concert_id, user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Reservation",
                id: concert_id,
            })?;
        let next = current.status.cancel()?;

        let reservation = ReservationRepo::upsert(&mut tx, concert_id, user_id, next).await?;
        adjust_or_abort(&mut tx, concert_id, 1).await?;
        HistoryRepo::append(&mut tx, concert_id, &concert.name, user_id, next).await?;

        tx.commit().await?;
        Ok(reservation)
    }
}

/// Apply a seat-count delta, aborting the flow if the guarded update did
/// not apply. Under the concert row lock this only fires if an invariant
/// was already broken.
async fn adjust_or_abort(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    concert_id: DbId,
    delta: i32,
) -> Result<(), CoordinatorError> {
    let adjusted = ConcertRepo::adjust_seats(tx, concert_id, delta).await?;
    if !adjusted {
        return Err(CoreError::Internal(format!(
            "Seat adjustment of {delta} for concert {concert_id} would leave the count out of range"
        ))
        .into());
    }
    Ok(())
}

/// Whether a storage error is transient contention worth retrying:
/// Postgres serialization_failure (40001) or deadlock_detected (40P01).
fn is_transient(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            matches!(db_err.code().as_deref(), Some("40001") | Some("40P01"))
        }
        _ => false,
    }
}
