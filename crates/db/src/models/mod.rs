//! Entity models and DTOs.
//!
//! Each submodule contains the row struct for a table plus the request
//! and projection DTOs the API serves. JSON is camelCase on the wire.

pub mod concert;
pub mod dashboard;
pub mod history;
pub mod reservation;
pub mod status;
