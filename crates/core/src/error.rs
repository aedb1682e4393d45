use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Every failure the reservation coordinator can surface maps to one of
/// these variants; the HTTP layer translates them to statuses and stable
/// machine-checkable codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    /// No seats remain for the concert.
    #[error("{0}")]
    Capacity(String),

    /// The requested transition is already satisfied (double reserve,
    /// double cancel).
    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
