//! Staffsurvey - employee survey storage and descriptive reporting.
//!
//! Persists employee profile submissions and free-text support requests in
//! a local SQLite database, serves a memoized snapshot of every employee,
//! and turns that snapshot into an Excel workbook or Plotly charts.
//!
//! # Architecture
//!
//! - [`domain`] - Employees, the tabular snapshot, and chart descriptions
//! - [`port`] - Traits for storage, notification, and time
//! - [`adapter`] - SQLite storage, notifiers, and the command-line interface
//! - [`application`] - The survey service, snapshot cache, and reports
//! - [`infrastructure`] - Configuration, logging, and service wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use staffsurvey::adapter::outbound::notifier::LogNotifier;
//! use staffsurvey::application::report::pie_of_status;
//! use staffsurvey::infrastructure::bootstrap::build_service;
//! use staffsurvey::infrastructure::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("staffsurvey.toml")?;
//!     let service = build_service(&config, Arc::new(LogNotifier))?;
//!     service.initialize();
//!     service.save_employee("Nguyen Van A", 30, "IT", "Engineer", "Updated");
//!     if let Some(chart) = pie_of_status(&service.all_employees()) {
//!         println!("{}", chart.to_plotly());
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
