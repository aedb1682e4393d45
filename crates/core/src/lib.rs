//! Domain logic for the Stagepass reservation service.
//!
//! Pure types and rules only: no I/O, no database access. The persistence
//! layer (`stagepass-db`) and HTTP layer (`stagepass-api`) build on top.

pub mod concert;
pub mod error;
pub mod types;
