//! Application services (use cases).
//!
//! [`survey`] is the storage-facing facade used by form hosts; [`report`]
//! turns the employees snapshot into exports and charts.

pub mod cache;
pub mod report;
pub mod survey;

pub use survey::{SurveyService, DEFAULT_SNAPSHOT_TTL};
