//! Reservation status enum and its transition rules.
//!
//! Maps to the Postgres `reservation_status` ENUM. The cycle per
//! (concert, user) pair is:
//!
//! ```text
//! NONE --reserve--> RESERVE --cancel--> CANCEL --reserve--> RESERVE ...
//! ```
//!
//! `None` is never persisted; a missing ledger row is equivalent to it.

use serde::{Deserialize, Serialize};
use stagepass_core::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    None,
    Reserve,
    Cancel,
}

impl ReservationStatus {
    /// Transition taken by a reserve request.
    ///
    /// Valid from `None` and `Cancel`; a second reserve while one is
    /// active is a conflict.
    pub fn reserve(self) -> Result<ReservationStatus, CoreError> {
        match self {
            ReservationStatus::None | ReservationStatus::Cancel => Ok(ReservationStatus::Reserve),
            ReservationStatus::Reserve => Err(CoreError::Conflict(
                "You already have an active reservation for this concert".to_string(),
            )),
        }
    }

    /// Transition taken by a cancel request.
    ///
    /// Only valid from `Reserve`. The coordinator surfaces a missing
    /// ledger row as NotFound before this is ever called on `None`.
    pub fn cancel(self) -> Result<ReservationStatus, CoreError> {
        match self {
            ReservationStatus::Reserve => Ok(ReservationStatus::Cancel),
            ReservationStatus::Cancel => Err(CoreError::Conflict(
                "Reservation is already cancelled".to_string(),
            )),
            ReservationStatus::None => Err(CoreError::Conflict(
                "No reservation to cancel".to_string(),
            )),
        }
    }
}
