//! Survey domain types: submitted records, the tabular snapshot, and charts.

pub mod chart;
pub mod employee;
pub mod table;

pub use chart::{Bar, Bin, Chart, Series, Slice};
pub use employee::{Employee, NewEmployee, NewSupportRequest, SupportRequest};
pub use table::{Cell, Table};
