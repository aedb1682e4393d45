//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` for plain reads. Mutating methods take a
//! `&mut sqlx::Transaction` and are invoked only from within a
//! [`crate::coordinator::ReservationCoordinator`] transaction, so the
//! atomicity contract cannot be bypassed.

pub mod concert_repo;
pub mod dashboard_repo;
pub mod history_repo;
pub mod reservation_repo;

pub use concert_repo::ConcertRepo;
pub use dashboard_repo::DashboardRepo;
pub use history_repo::HistoryRepo;
pub use reservation_repo::ReservationRepo;
