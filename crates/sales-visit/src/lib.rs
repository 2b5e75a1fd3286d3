//! Sales visit and lead reporting.
//!
//! The `workflows::visits` module holds the pure reporting core (time-window
//! filtering, aggregation, lead history and presentation views). The
//! `workflows::dataset` module loads customers, reports and users from a CSV
//! directory and feeds them through the [`workflows::visits::VisitDataSource`]
//! boundary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
