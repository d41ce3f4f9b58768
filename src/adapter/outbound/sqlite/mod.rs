//! SQLite persistence adapter.
//!
//! Provides the Diesel-backed implementation of the
//! [`SurveyStore`](crate::port::SurveyStore) port.

pub mod database;
pub mod store;

pub use store::SqliteSurveyStore;
