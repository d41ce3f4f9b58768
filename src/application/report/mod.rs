//! Reporting over the employees snapshot.
//!
//! Every function here is pure: it reads a [`Table`](crate::domain::Table)
//! and returns bytes or a [`Chart`](crate::domain::Chart), nothing else.

mod chart;
mod spreadsheet;

pub use chart::{bar_of_department, bar_of_title, histogram_of_age, pie_of_status, HISTOGRAM_BINS};
pub use spreadsheet::{build_spreadsheet, DEFAULT_SHEET_NAME};
