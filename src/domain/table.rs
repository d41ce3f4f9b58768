//! In-memory tabular snapshot of the employees table.
//!
//! A [`Table`] is a list of named columns plus rows of [`Cell`]s. It is the
//! handoff between storage and reporting: storage produces it, every report
//! function consumes it without touching the database.

use std::fmt;

use serde::Serialize;

use crate::domain::employee::Employee;
use crate::error::{Error, Result};

/// Column holding the employee's full name.
pub const FULL_NAME: &str = "full_name";
/// Column holding the employee's age in years.
pub const AGE: &str = "age";
/// Column holding the department name.
pub const DEPARTMENT: &str = "department";
/// Column holding the job title.
pub const TITLE: &str = "title";
/// Column holding the profile update status.
pub const STATUS: &str = "status";
/// Column holding the last-update timestamp.
pub const UPDATED_AT: &str = "updated_at";

/// Business columns of the employees snapshot, in storage order.
pub const EMPLOYEE_COLUMNS: [&str; 6] = [FULL_NAME, AGE, DEPARTMENT, TITLE, STATUS, UPDATED_AT];

/// Timestamp layout used by SQLite's `CURRENT_TIMESTAMP`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single table value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Text(String),
}

impl Cell {
    /// Integer payload, if any.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Cell::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Integer(value) => write!(f, "{value}"),
            Cell::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Null, Into::into)
    }
}

/// Ordered columns plus rows of equal width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table with the given columns and no rows.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// A table with no columns and no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the employees snapshot from stored records.
    #[must_use]
    pub fn from_employees(employees: &[Employee]) -> Self {
        let mut table = Self::new(EMPLOYEE_COLUMNS);
        table.rows = employees
            .iter()
            .map(|employee| {
                vec![
                    Cell::from(employee.full_name.as_str()),
                    Cell::from(employee.age),
                    Cell::from(employee.department.as_str()),
                    Cell::from(employee.title.as_str()),
                    Cell::from(employee.status.as_str()),
                    Cell::from(
                        employee
                            .updated_at
                            .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string()),
                    ),
                ]
            })
            .collect();
        table
    }

    /// Append a row.
    ///
    /// # Errors
    /// Returns [`Error::Shape`] if the row width differs from the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::Shape {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Iterate over the values of one column, or `None` if it does not exist.
    pub fn column_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Cell> + 'a> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    /// Count occurrences of each distinct non-null value in a column.
    ///
    /// Sorted by descending count; ties keep first-seen order.
    #[must_use]
    pub fn value_counts(&self, name: &str) -> Option<Vec<(String, usize)>> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for cell in self.column_values(name)? {
            if cell.is_null() {
                continue;
            }
            let key = cell.to_string();
            match counts.iter_mut().find(|(label, _)| *label == key) {
                Some((_, count)) => *count += 1,
                None => counts.push((key, 1)),
            }
        }
        counts.sort_by(|left, right| right.1.cmp(&left.1));
        Some(counts)
    }
}
